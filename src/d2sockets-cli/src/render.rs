//! Text rendering for built sockets

use d2sockets::{BuiltSockets, InventoryItemDefinition, Plug, Socket};
use std::fmt::{self, Write};

fn plug_label(plug: &Plug<'_>, active: Option<u32>) -> String {
    let marker = if active == Some(plug.hash()) { "*" } else { " " };
    let disabled = if plug.enabled { "" } else { " [disabled]" };
    format!("{} {} ({}){}", marker, plug.name(), plug.hash(), disabled)
}

fn write_socket(out: &mut impl Write, socket: &Socket<'_>) -> fmt::Result {
    let active = socket.plug_hash();
    let kind = if socket.is_perk { "perk" } else { "socket" };
    let random = if socket.has_randomized_plug_items {
        ", randomized"
    } else {
        ""
    };
    writeln!(out, "  [{}] {}{}", socket.socket_index, kind, random)?;

    if socket.plug_options.is_empty() {
        if let Some(plug) = &socket.plug {
            writeln!(out, "    {}", plug_label(plug, active))?;
        }
    }
    for plug in &socket.plug_options {
        writeln!(out, "    {}", plug_label(plug, active))?;
        for reason in plug.enable_fail_reasons.lines() {
            writeln!(out, "        ! {}", reason)?;
        }
    }
    Ok(())
}

fn write_sockets(
    out: &mut impl Write,
    item_def: &InventoryItemDefinition,
    built: &BuiltSockets<'_>,
) -> fmt::Result {
    writeln!(out, "{} ({})", item_def.display_properties.name, item_def.hash)?;

    if built.missing_sockets {
        writeln!(out, "  warning: profile is missing socket data for this item")?;
    }

    let Some(sockets) = &built.sockets else {
        return writeln!(out, "  no sockets");
    };

    for category in &sockets.categories {
        writeln!(out, "{}", category.category.display_properties.name)?;
        for socket in &category.sockets {
            write_socket(out, socket)?;
        }
    }
    Ok(())
}

/// Render an item's sockets as an indented tree
pub fn render_sockets(item_def: &InventoryItemDefinition, built: &BuiltSockets<'_>) -> String {
    let mut out = String::new();
    // Writing into a String can't fail
    let _ = write_sockets(&mut out, item_def, built);
    out
}
