use crate::ui::table::columns::{Align, BadgeTone};

pub const BUTTON: &str = "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;";
pub const BUTTON_DISABLED: &str = "border: 1px solid #ddd; background: #f5f5f5; color: #aaa; padding: 4px 10px; border-radius: 6px; cursor: default;";
pub const INPUT: &str = "border: 1px solid #bbb; border-radius: 6px; padding: 4px 8px; min-width: 180px;";
pub const POPOVER: &str = "position: absolute; right: 0; top: calc(100% + 4px); min-width: 220px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;";

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 8px;"
}

pub fn table_header_cell_style(align: Align, sortable: bool) -> String {
    format!(
        "position: sticky; top: 0; background: #f7f7f7; border-bottom: 1px solid #ddd; padding: 8px 10px; white-space: nowrap; text-align: {};{}",
        align.css(),
        if sortable { " cursor: pointer; user-select: none;" } else { "" }
    )
}

pub fn table_cell_style(align: Align) -> String {
    format!(
        "border-bottom: 1px solid #eee; padding: 6px 10px; text-align: {};",
        align.css()
    )
}

pub fn badge_style(tone: BadgeTone) -> String {
    let (background, color) = match tone {
        BadgeTone::Neutral => ("#eef0f3", "#444"),
        BadgeTone::Info => ("#e6f0ff", "#1d4ed8"),
        BadgeTone::Success => ("#e7f7ed", "#15803d"),
        BadgeTone::Warning => ("#fff6e0", "#b45309"),
        BadgeTone::Danger => ("#fdecec", "#b91c1c"),
    };
    format!(
        "display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 12px; background: {background}; color: {color};"
    )
}

pub const ACTION_LINK: &str = "color: #1d4ed8; text-decoration: none; margin-right: 8px;";

pub fn button_style(enabled: bool) -> &'static str {
    if enabled {
        BUTTON
    } else {
        BUTTON_DISABLED
    }
}
