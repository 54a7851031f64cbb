//! Presentation template module.
//!
//! Provides the fixed parts every generated presentation shares: one slide
//! master with a single blank layout, a theme, and (when any slide has
//! speaker notes) a notes master. The XML lives in `resources/` and is
//! embedded at compile time.

/// Slide master with a one-entry layout list pointing at `rId1`.
pub fn default_slide_master_xml() -> &'static str {
    include_str!("resources/slideMasters/slideMaster1.xml")
}

/// Blank slide layout; every slide uses it.
pub fn blank_slide_layout_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout1.xml")
}

/// Notes master
pub fn default_notes_master_xml() -> &'static str {
    include_str!("resources/notesMaster.xml")
}

/// Theme shared by the slide master and the notes master.
pub fn default_theme_xml() -> &'static str {
    include_str!("resources/theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    include_str!("resources/tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    include_str!("resources/viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    include_str!("resources/presProps.xml")
}
