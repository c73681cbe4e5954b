//! Channel tree to nested `<ul>` markup.
//!
//! Every channel is one `<li>` holding a link to its connect URL. A channel
//! with subchannels or users gets exactly one nested `<ul>`: subchannels
//! first, then users, both in input order. Leaf channels never emit an empty
//! list.

use crate::transport::types::{Channel, User};
use crate::viewer::icons::{IconKind, IconSet};

pub fn render_tree(root: &Channel, icons: &IconSet) -> String {
    let mut out = String::new();
    write_channel(&mut out, root, true, icons);
    out
}

pub fn render_channel(channel: &Channel, emit_own_container: bool, icons: &IconSet) -> String {
    let mut out = String::new();
    write_channel(&mut out, channel, emit_own_container, icons);
    out
}

pub fn render_user(user: &User, icons: &IconSet) -> String {
    let mut out = String::new();
    write_user(&mut out, user, icons);
    out
}

fn write_channel(out: &mut String, channel: &Channel, emit_own_container: bool, icons: &IconSet) {
    if emit_own_container {
        out.push_str("<ul>");
    }

    out.push_str("<li><a href='");
    push_escaped(out, &channel.connect_url);
    out.push_str("'>");
    push_escaped(out, &channel.name);
    out.push_str("</a>");

    if channel.has_children() {
        out.push_str("<ul>");
        for sub in &channel.channels {
            write_channel(out, sub, false, icons);
        }
        for user in &channel.users {
            write_user(out, user, icons);
        }
        out.push_str("</ul>");
    }

    out.push_str("</li>");

    if emit_own_container {
        out.push_str("</ul>");
    }
}

fn write_user(out: &mut String, user: &User, icons: &IconSet) {
    out.push_str("<li>");
    for kind in status_markers(user) {
        let icon = icons.get(kind);
        out.push_str("<img src='");
        push_escaped(out, &icon.src);
        out.push_str("' alt='");
        push_escaped(out, &icon.alt);
        out.push_str("' />");
    }
    out.push_str("<span>");
    push_escaped(out, &user.name);
    out.push_str("</span></li>");
}

/// Markers that apply to `user`, in render order.
pub fn status_markers(user: &User) -> impl Iterator<Item = IconKind> + '_ {
    IconKind::ALL.into_iter().filter(move |kind| match kind {
        IconKind::Authenticated => user.is_authenticated(),
        IconKind::Suppressed => user.suppress,
        IconKind::SelfDeafened => user.self_deaf,
        IconKind::ServerDeafened => user.deaf,
        IconKind::SelfMuted => user.self_mute,
        IconKind::ServerMuted => user.mute,
    })
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
