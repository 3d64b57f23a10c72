use camchat_core::{MediaItem, MediaKind, Message};
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Icon and label, padded to `width` visible columns.
pub fn kind_label(kind: MediaKind, width: usize) -> String {
    format!("{:<width$}", format!("{} {}", kind.icon(), kind.label()))
}

/// Pads before colouring so escape codes don't count towards the width.
pub fn colored_kind(kind: MediaKind, width: usize) -> ColoredString {
    let text = kind_label(kind, width);
    match kind {
        MediaKind::Video => text.green(),
        MediaKind::RtspStream => text.magenta(),
        MediaKind::Link => text.blue(),
    }
}

fn kind_color(kind: MediaKind) -> comfy_table::Color {
    match kind {
        MediaKind::Video => comfy_table::Color::Green,
        MediaKind::RtspStream => comfy_table::Color::Magenta,
        MediaKind::Link => comfy_table::Color::Blue,
    }
}

pub fn media_table(items: &[MediaItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(comfy_table::Color::Cyan),
            Cell::new("Kind").fg(comfy_table::Color::Cyan),
            Cell::new("URL").fg(comfy_table::Color::Cyan),
        ]);

    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(format!("{} {}", item.kind.icon(), item.kind.label()))
                .fg(kind_color(item.kind)),
            Cell::new(&item.url),
        ]);
    }

    table
}

/// Prints a bot reply followed by its media, if any.
pub fn print_bot_message(message: &Message) {
    let time = message.sent_at.with_timezone(&chrono::Local).format("%H:%M");
    println!(
        "{} {} {}",
        time.to_string().dimmed(),
        "assistant>".cyan().bold(),
        message.text
    );

    let media = message.media();
    if media.is_empty() {
        return;
    }

    println!();
    println!("{}", media_table(&media));
    if media.iter().any(|m| m.kind == MediaKind::RtspStream) {
        println!(
            "  {} RTSP streams need an external player such as VLC.",
            "!".yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_label_pads_visible_width() {
        for kind in [MediaKind::Video, MediaKind::RtspStream, MediaKind::Link] {
            assert_eq!(kind_label(kind, 16).chars().count(), 16);
        }
        assert_eq!(kind_label(MediaKind::Link, 16), "↗ Link          ");
    }

    #[test]
    fn test_colored_kind_keeps_padding_inside_color() {
        colored::control::set_override(true);
        let rendered = colored_kind(MediaKind::Video, 16).to_string();
        colored::control::unset_override();

        assert!(rendered.starts_with('\u{1b}'));
        assert!(rendered.contains(&kind_label(MediaKind::Video, 16)));
    }
}
