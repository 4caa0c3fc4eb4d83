use std::fmt::Write;

use crate::{
    NodeId,
    core::world::Core,
    error::{Error, Result},
};

/// Render every top-level subtree as indented text: one line per node with
/// its name, id and rectangle, followed by status flags. Hidden subtrees are
/// listed but not descended into. This is a debug function.
pub fn dump(core: &Core) -> Result<String> {
    let mut out = String::new();
    for root in core.roots() {
        dump_node(&mut out, core, *root, 0)?;
    }
    Ok(out)
}

/// Dump a single subtree.
pub fn dump_subtree(core: &Core, root: NodeId) -> Result<String> {
    let mut out = String::new();
    dump_node(&mut out, core, root, 0)?;
    Ok(out)
}

/// Walk a node subtree and append formatted output.
fn dump_node(out: &mut String, core: &Core, node_id: NodeId, level: usize) -> Result<()> {
    let node = core
        .node(node_id)
        .ok_or_else(|| Error::NotFound(node_id))?;
    let pad = "    ".repeat(level);
    let r = node.rect();

    let mut flags = Vec::new();
    if core.input().focused() == Some(node_id) {
        flags.push("FOCUSED");
    }
    if core.input().hovered() == Some(node_id) {
        flags.push("hovered");
    }
    if node.hidden() {
        flags.push("hidden");
    }

    write!(
        out,
        "{pad}{} {node_id:?} [{}, {} {}x{}]",
        node.name(),
        r.tl.x,
        r.tl.y,
        r.w,
        r.h
    )
    .map_err(|e| Error::Internal(e.to_string()))?;
    if !flags.is_empty() {
        write!(out, " {}", flags.join(", ")).map_err(|e| Error::Internal(e.to_string()))?;
    }
    out.push('\n');

    if !node.hidden() {
        for child in node.children() {
            dump_node(out, core, *child, level + 1)?;
        }
    }
    Ok(())
}
