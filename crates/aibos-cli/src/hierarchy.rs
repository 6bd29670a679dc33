//! # Hierarchy CLI — project and render the organization tree.
//!
//! The tree passes through the render guard before anything is printed.
//! In kill-switch mode a budget violation prints the reason and exits with
//! [`EXIT_REFUSED`].
//!
//! ```bash
//! aibos hierarchy --orgs orgs.yaml
//! aibos hierarchy --orgs orgs.json --max-nodes 100 --kill-switch
//! aibos hierarchy --orgs orgs.json --fps 24 --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aibos_hierarchy::{
    project, HierarchyRenderGuard, OrganizationHierarchyNode, RenderDetail, SafetyLimits,
    StaticTelemetry, TidyTreeLayout,
};

use crate::config::AibosConfig;
use crate::ingest::load_organizations;
use crate::{print_json, EXIT_OK, EXIT_REFUSED};

/// Arguments for `aibos hierarchy`.
#[derive(Args, Debug)]
pub struct HierarchyArgs {
    /// Organizations file (JSON or YAML array).
    #[arg(long)]
    pub orgs: PathBuf,

    /// Override `safety_limits.max_nodes`.
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Refuse to render when any budget is exceeded.
    #[arg(long)]
    pub kill_switch: bool,

    /// Measured frame rate to check against `min_fps`.
    #[arg(long)]
    pub fps: Option<f64>,

    /// Heap in use, megabytes, to check against `max_memory_mb`.
    #[arg(long)]
    pub heap_mb: Option<f64>,

    /// Emit layout primitives as JSON instead of an indented tree.
    #[arg(long)]
    pub json: bool,
}

impl HierarchyArgs {
    /// Configured limits with this invocation's overrides applied.
    pub fn limits(&self, base: SafetyLimits) -> SafetyLimits {
        SafetyLimits {
            max_nodes: self.max_nodes.unwrap_or(base.max_nodes),
            kill_switch: base.kill_switch || self.kill_switch,
            ..base
        }
    }

    /// Telemetry readings supplied on the command line.
    pub fn telemetry(&self) -> StaticTelemetry {
        StaticTelemetry {
            heap_used_bytes: self
                .heap_mb
                .filter(|mb| mb.is_finite() && *mb >= 0.0)
                .map(|mb| (mb * 1024.0 * 1024.0) as u64),
            frames_per_second: self.fps,
        }
    }
}

/// Execute `aibos hierarchy`.
pub fn run_hierarchy(args: &HierarchyArgs, config: &AibosConfig) -> Result<u8> {
    let ingested = load_organizations(&args.orgs)
        .with_context(|| format!("loading organizations from {}", args.orgs.display()))?;
    let tree = project(&ingested.records);

    let guard = HierarchyRenderGuard::new(args.limits(config.safety_limits));
    let telemetry = args.telemetry();

    if args.json {
        return match guard.render(&tree, &TidyTreeLayout::default(), &telemetry) {
            Ok(primitives) => {
                print_json(&primitives)?;
                Ok(EXIT_OK)
            }
            Err(e) => {
                eprintln!("render refused: {e}");
                Ok(EXIT_REFUSED)
            }
        };
    }

    match guard.check(&tree, &telemetry) {
        Ok(plan) => {
            print!("{}", format_tree(&tree, plan.detail));
            for v in &plan.violations {
                eprintln!("warning: {v}");
            }
            Ok(EXIT_OK)
        }
        Err(e) => {
            eprintln!("render refused: {e}");
            Ok(EXIT_REFUSED)
        }
    }
}

/// Deepest level that still gets its own indentation.
pub const MAX_INDENT_DEPTH: usize = 32;

/// Indented tree, two spaces per level. Simplified detail prints ids only.
///
/// Lines below [`MAX_INDENT_DEPTH`] keep that indentation and carry a
/// `[depth N]` prefix instead, so output stays linear in the node count.
pub fn format_tree(tree: &OrganizationHierarchyNode, detail: RenderDetail) -> String {
    let mut out = String::new();
    let mut stack = vec![(tree, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        let mut indent = "  ".repeat(depth.min(MAX_INDENT_DEPTH));
        if depth > MAX_INDENT_DEPTH {
            indent.push_str(&format!("[depth {depth}] "));
        }
        let line = match (detail, node.id.as_ref()) {
            (RenderDetail::Simplified, Some(id)) => id.as_str().to_string(),
            (RenderDetail::Simplified, None) => node.name.clone(),
            (RenderDetail::Full, _) => match node.attributes.get("type") {
                Some(kind) => format!("{} ({kind})", node.name),
                None => node.name.clone(),
            },
        };
        out.push_str(&indent);
        out.push_str(&line);
        out.push('\n');
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    out
}
