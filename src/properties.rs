//! Constructors for the CSS properties, named in snake_case
//! (`font_weight` for `font-weight`, `continue_` for `continue`), and
//! for the at-rules. `prop`, `at_single` and `at_nested` cover
//! anything else.

use kstring::KString;

use crate::{css::{at_nested, at_single, prop, CssRule, IntoSelectors},
            text::Text};

macro_rules! properties {
    ($($name:ident $css:literal)*) => {
        $(
            pub fn $name<'a>(value: impl Into<Text<'a>>) -> CssRule<'a> {
                prop(KString::from_static($css), value)
            }
        )*

        pub const PROPERTY_NAMES: &[&str] = &[$($css),*];
    }
}

macro_rules! single_at_rules {
    ($($name:ident $css:literal)*) => {
        $(
            #[doc = concat!("`", $css, " value;`")]
            pub fn $name<'a>(value: impl Into<Text<'a>>) -> CssRule<'a> {
                at_single(KString::from_static($css), value)
            }
        )*
    }
}

macro_rules! nested_at_rules {
    ($($name:ident $css:literal)*) => {
        $(
            #[doc = concat!("`", $css, " selectors{children}`")]
            pub fn $name<'a>(
                selectors: impl IntoSelectors<'a>,
                children: impl IntoIterator<Item = CssRule<'a>>,
            ) -> CssRule<'a> {
                at_nested(KString::from_static($css), selectors, children)
            }
        )*
    }
}

single_at_rules! {
    at_charset "@charset"
    at_import "@import"
    at_namespace "@namespace"
}

nested_at_rules! {
    at_media "@media"
    at_supports "@supports"
    at_document "@document"
    at_page "@page"
    at_font_face "@font-face"
    at_keyframes "@keyframes"
    at_counter_style "@counter-style"
    at_font_feature_values "@font-feature-values"
    at_property "@property"
    at_layer "@layer"
}

properties! {
    accent_color "accent-color"
    align_content "align-content"
    align_items "align-items"
    align_self "align-self"
    alignment_baseline "alignment-baseline"
    all "all"
    animation "animation"
    animation_delay "animation-delay"
    animation_direction "animation-direction"
    animation_duration "animation-duration"
    animation_fill_mode "animation-fill-mode"
    animation_iteration_count "animation-iteration-count"
    animation_name "animation-name"
    animation_play_state "animation-play-state"
    animation_timing_function "animation-timing-function"
    appearance "appearance"
    aspect_ratio "aspect-ratio"
    azimuth "azimuth"
    backdrop_filter "backdrop-filter"
    backface_visibility "backface-visibility"
    background "background"
    background_attachment "background-attachment"
    background_blend_mode "background-blend-mode"
    background_clip "background-clip"
    background_color "background-color"
    background_image "background-image"
    background_origin "background-origin"
    background_position "background-position"
    background_repeat "background-repeat"
    background_size "background-size"
    baseline_shift "baseline-shift"
    baseline_source "baseline-source"
    block_ellipsis "block-ellipsis"
    block_size "block-size"
    bookmark_label "bookmark-label"
    bookmark_level "bookmark-level"
    bookmark_state "bookmark-state"
    border "border"
    border_block "border-block"
    border_block_color "border-block-color"
    border_block_end "border-block-end"
    border_block_end_color "border-block-end-color"
    border_block_end_style "border-block-end-style"
    border_block_end_width "border-block-end-width"
    border_block_start "border-block-start"
    border_block_start_color "border-block-start-color"
    border_block_start_style "border-block-start-style"
    border_block_start_width "border-block-start-width"
    border_block_style "border-block-style"
    border_block_width "border-block-width"
    border_bottom "border-bottom"
    border_bottom_color "border-bottom-color"
    border_bottom_left_radius "border-bottom-left-radius"
    border_bottom_right_radius "border-bottom-right-radius"
    border_bottom_style "border-bottom-style"
    border_bottom_width "border-bottom-width"
    border_boundary "border-boundary"
    border_collapse "border-collapse"
    border_color "border-color"
    border_end_end_radius "border-end-end-radius"
    border_end_start_radius "border-end-start-radius"
    border_image "border-image"
    border_image_outset "border-image-outset"
    border_image_repeat "border-image-repeat"
    border_image_slice "border-image-slice"
    border_image_source "border-image-source"
    border_image_width "border-image-width"
    border_inline "border-inline"
    border_inline_color "border-inline-color"
    border_inline_end "border-inline-end"
    border_inline_end_color "border-inline-end-color"
    border_inline_end_style "border-inline-end-style"
    border_inline_end_width "border-inline-end-width"
    border_inline_start "border-inline-start"
    border_inline_start_color "border-inline-start-color"
    border_inline_start_style "border-inline-start-style"
    border_inline_start_width "border-inline-start-width"
    border_inline_style "border-inline-style"
    border_inline_width "border-inline-width"
    border_left "border-left"
    border_left_color "border-left-color"
    border_left_style "border-left-style"
    border_left_width "border-left-width"
    border_radius "border-radius"
    border_right "border-right"
    border_right_color "border-right-color"
    border_right_style "border-right-style"
    border_right_width "border-right-width"
    border_spacing "border-spacing"
    border_start_end_radius "border-start-end-radius"
    border_start_start_radius "border-start-start-radius"
    border_style "border-style"
    border_top "border-top"
    border_top_color "border-top-color"
    border_top_left_radius "border-top-left-radius"
    border_top_right_radius "border-top-right-radius"
    border_top_style "border-top-style"
    border_top_width "border-top-width"
    border_width "border-width"
    bottom "bottom"
    box_decoration_break "box-decoration-break"
    box_shadow "box-shadow"
    box_sizing "box-sizing"
    box_snap "box-snap"
    break_after "break-after"
    break_before "break-before"
    break_inside "break-inside"
    caption_side "caption-side"
    caret "caret"
    caret_color "caret-color"
    caret_shape "caret-shape"
    chains "chains"
    clear "clear"
    clip "clip"
    clip_path "clip-path"
    clip_rule "clip-rule"
    color "color"
    color_adjust "color-adjust"
    color_interpolation_filters "color-interpolation-filters"
    color_scheme "color-scheme"
    column_count "column-count"
    column_fill "column-fill"
    column_gap "column-gap"
    column_rule "column-rule"
    column_rule_color "column-rule-color"
    column_rule_style "column-rule-style"
    column_rule_width "column-rule-width"
    column_span "column-span"
    column_width "column-width"
    columns "columns"
    contain "contain"
    contain_intrinsic_block_size "contain-intrinsic-block-size"
    contain_intrinsic_height "contain-intrinsic-height"
    contain_intrinsic_inline_size "contain-intrinsic-inline-size"
    contain_intrinsic_size "contain-intrinsic-size"
    contain_intrinsic_width "contain-intrinsic-width"
    container "container"
    container_name "container-name"
    container_type "container-type"
    content "content"
    content_visibility "content-visibility"
    continue_ "continue"
    counter_increment "counter-increment"
    counter_reset "counter-reset"
    counter_set "counter-set"
    cue "cue"
    cue_after "cue-after"
    cue_before "cue-before"
    cursor "cursor"
    direction "direction"
    display "display"
    dominant_baseline "dominant-baseline"
    elevation "elevation"
    empty_cells "empty-cells"
    filter "filter"
    flex "flex"
    flex_basis "flex-basis"
    flex_direction "flex-direction"
    flex_flow "flex-flow"
    flex_grow "flex-grow"
    flex_shrink "flex-shrink"
    flex_wrap "flex-wrap"
    float "float"
    flood_color "flood-color"
    flood_opacity "flood-opacity"
    flow "flow"
    flow_from "flow-from"
    flow_into "flow-into"
    font "font"
    font_family "font-family"
    font_feature_settings "font-feature-settings"
    font_kerning "font-kerning"
    font_language_override "font-language-override"
    font_optical_sizing "font-optical-sizing"
    font_palette "font-palette"
    font_size "font-size"
    font_size_adjust "font-size-adjust"
    font_stretch "font-stretch"
    font_style "font-style"
    font_synthesis "font-synthesis"
    font_synthesis_small_caps "font-synthesis-small-caps"
    font_synthesis_style "font-synthesis-style"
    font_synthesis_weight "font-synthesis-weight"
    font_variant "font-variant"
    font_variant_alternates "font-variant-alternates"
    font_variant_caps "font-variant-caps"
    font_variant_east_asian "font-variant-east-asian"
    font_variant_emoji "font-variant-emoji"
    font_variant_ligatures "font-variant-ligatures"
    font_variant_numeric "font-variant-numeric"
    font_variant_position "font-variant-position"
    font_variation_settings "font-variation-settings"
    font_weight "font-weight"
    footnote_display "footnote-display"
    footnote_policy "footnote-policy"
    forced_color_adjust "forced-color-adjust"
    gap "gap"
    glyph_orientation_vertical "glyph-orientation-vertical"
    grid "grid"
    grid_area "grid-area"
    grid_auto_columns "grid-auto-columns"
    grid_auto_flow "grid-auto-flow"
    grid_auto_rows "grid-auto-rows"
    grid_column "grid-column"
    grid_column_end "grid-column-end"
    grid_column_start "grid-column-start"
    grid_row "grid-row"
    grid_row_end "grid-row-end"
    grid_row_start "grid-row-start"
    grid_template "grid-template"
    grid_template_areas "grid-template-areas"
    grid_template_columns "grid-template-columns"
    grid_template_rows "grid-template-rows"
    hanging_punctuation "hanging-punctuation"
    height "height"
    hyphenate_character "hyphenate-character"
    hyphenate_limit_chars "hyphenate-limit-chars"
    hyphenate_limit_last "hyphenate-limit-last"
    hyphenate_limit_lines "hyphenate-limit-lines"
    hyphenate_limit_zone "hyphenate-limit-zone"
    hyphens "hyphens"
    image_orientation "image-orientation"
    image_rendering "image-rendering"
    image_resolution "image-resolution"
    initial_letter "initial-letter"
    initial_letter_align "initial-letter-align"
    initial_letter_wrap "initial-letter-wrap"
    inline_size "inline-size"
    inline_sizing "inline-sizing"
    inset "inset"
    inset_block "inset-block"
    inset_block_end "inset-block-end"
    inset_block_start "inset-block-start"
    inset_inline "inset-inline"
    inset_inline_end "inset-inline-end"
    inset_inline_start "inset-inline-start"
    isolation "isolation"
    justify_content "justify-content"
    justify_items "justify-items"
    justify_self "justify-self"
    leading_trim "leading-trim"
    left "left"
    letter_spacing "letter-spacing"
    lighting_color "lighting-color"
    line_break "line-break"
    line_clamp "line-clamp"
    line_grid "line-grid"
    line_height "line-height"
    line_padding "line-padding"
    line_snap "line-snap"
    list_style "list-style"
    list_style_image "list-style-image"
    list_style_position "list-style-position"
    list_style_type "list-style-type"
    margin "margin"
    margin_block "margin-block"
    margin_block_end "margin-block-end"
    margin_block_start "margin-block-start"
    margin_bottom "margin-bottom"
    margin_inline "margin-inline"
    margin_inline_end "margin-inline-end"
    margin_inline_start "margin-inline-start"
    margin_left "margin-left"
    margin_right "margin-right"
    margin_top "margin-top"
    margin_trim "margin-trim"
    marker_side "marker-side"
    mask "mask"
    mask_border "mask-border"
    mask_border_mode "mask-border-mode"
    mask_border_outset "mask-border-outset"
    mask_border_repeat "mask-border-repeat"
    mask_border_slice "mask-border-slice"
    mask_border_source "mask-border-source"
    mask_border_width "mask-border-width"
    mask_clip "mask-clip"
    mask_composite "mask-composite"
    mask_image "mask-image"
    mask_mode "mask-mode"
    mask_origin "mask-origin"
    mask_position "mask-position"
    mask_repeat "mask-repeat"
    mask_size "mask-size"
    mask_type "mask-type"
    max_block_size "max-block-size"
    max_height "max-height"
    max_inline_size "max-inline-size"
    max_lines "max-lines"
    max_width "max-width"
    min_block_size "min-block-size"
    min_height "min-height"
    min_inline_size "min-inline-size"
    min_intrinsic_sizing "min-intrinsic-sizing"
    min_width "min-width"
    mix_blend_mode "mix-blend-mode"
    nav_down "nav-down"
    nav_left "nav-left"
    nav_right "nav-right"
    nav_up "nav-up"
    object_fit "object-fit"
    object_position "object-position"
    offset "offset"
    offset_anchor "offset-anchor"
    offset_distance "offset-distance"
    offset_path "offset-path"
    offset_position "offset-position"
    offset_rotate "offset-rotate"
    opacity "opacity"
    order "order"
    orphans "orphans"
    outline "outline"
    outline_color "outline-color"
    outline_offset "outline-offset"
    outline_style "outline-style"
    outline_width "outline-width"
    overflow "overflow"
    overflow_anchor "overflow-anchor"
    overflow_block "overflow-block"
    overflow_clip_margin "overflow-clip-margin"
    overflow_inline "overflow-inline"
    overflow_wrap "overflow-wrap"
    overflow_x "overflow-x"
    overflow_y "overflow-y"
    padding "padding"
    padding_block "padding-block"
    padding_block_end "padding-block-end"
    padding_block_start "padding-block-start"
    padding_bottom "padding-bottom"
    padding_inline "padding-inline"
    padding_inline_end "padding-inline-end"
    padding_inline_start "padding-inline-start"
    padding_left "padding-left"
    padding_right "padding-right"
    padding_top "padding-top"
    page "page"
    page_break_after "page-break-after"
    page_break_before "page-break-before"
    page_break_inside "page-break-inside"
    pause "pause"
    pause_after "pause-after"
    pause_before "pause-before"
    perspective "perspective"
    perspective_origin "perspective-origin"
    pitch "pitch"
    pitch_range "pitch-range"
    place_content "place-content"
    place_items "place-items"
    place_self "place-self"
    play_during "play-during"
    pointer_events "pointer-events"
    position "position"
    print_color_adjust "print-color-adjust"
    quotes "quotes"
    region_fragment "region-fragment"
    resize "resize"
    rest "rest"
    rest_after "rest-after"
    rest_before "rest-before"
    richness "richness"
    right "right"
    rotate "rotate"
    row_gap "row-gap"
    ruby_align "ruby-align"
    ruby_merge "ruby-merge"
    ruby_overhang "ruby-overhang"
    ruby_position "ruby-position"
    running "running"
    scale "scale"
    scroll_behavior "scroll-behavior"
    scroll_margin "scroll-margin"
    scroll_margin_block "scroll-margin-block"
    scroll_margin_block_end "scroll-margin-block-end"
    scroll_margin_block_start "scroll-margin-block-start"
    scroll_margin_bottom "scroll-margin-bottom"
    scroll_margin_inline "scroll-margin-inline"
    scroll_margin_inline_end "scroll-margin-inline-end"
    scroll_margin_inline_start "scroll-margin-inline-start"
    scroll_margin_left "scroll-margin-left"
    scroll_margin_right "scroll-margin-right"
    scroll_margin_top "scroll-margin-top"
    scroll_padding "scroll-padding"
    scroll_padding_block "scroll-padding-block"
    scroll_padding_block_end "scroll-padding-block-end"
    scroll_padding_block_start "scroll-padding-block-start"
    scroll_padding_bottom "scroll-padding-bottom"
    scroll_padding_inline "scroll-padding-inline"
    scroll_padding_inline_end "scroll-padding-inline-end"
    scroll_padding_inline_start "scroll-padding-inline-start"
    scroll_padding_left "scroll-padding-left"
    scroll_padding_right "scroll-padding-right"
    scroll_padding_top "scroll-padding-top"
    scroll_snap_align "scroll-snap-align"
    scroll_snap_stop "scroll-snap-stop"
    scroll_snap_type "scroll-snap-type"
    scrollbar_color "scrollbar-color"
    scrollbar_gutter "scrollbar-gutter"
    scrollbar_width "scrollbar-width"
    shape_image_threshold "shape-image-threshold"
    shape_inside "shape-inside"
    shape_margin "shape-margin"
    shape_outside "shape-outside"
    spatial_navigation_action "spatial-navigation-action"
    spatial_navigation_contain "spatial-navigation-contain"
    spatial_navigation_function "spatial-navigation-function"
    speak "speak"
    speak_as "speak-as"
    speak_header "speak-header"
    speak_numeral "speak-numeral"
    speak_punctuation "speak-punctuation"
    speech_rate "speech-rate"
    src "src"
    stress "stress"
    string_set "string-set"
    tab_size "tab-size"
    table_layout "table-layout"
    text_align "text-align"
    text_align_all "text-align-all"
    text_align_last "text-align-last"
    text_combine_upright "text-combine-upright"
    text_decoration "text-decoration"
    text_decoration_color "text-decoration-color"
    text_decoration_line "text-decoration-line"
    text_decoration_skip "text-decoration-skip"
    text_decoration_skip_box "text-decoration-skip-box"
    text_decoration_skip_ink "text-decoration-skip-ink"
    text_decoration_skip_inset "text-decoration-skip-inset"
    text_decoration_skip_self "text-decoration-skip-self"
    text_decoration_skip_spaces "text-decoration-skip-spaces"
    text_decoration_style "text-decoration-style"
    text_decoration_thickness "text-decoration-thickness"
    text_edge "text-edge"
    text_emphasis "text-emphasis"
    text_emphasis_color "text-emphasis-color"
    text_emphasis_position "text-emphasis-position"
    text_emphasis_skip "text-emphasis-skip"
    text_emphasis_style "text-emphasis-style"
    text_group_align "text-group-align"
    text_indent "text-indent"
    text_justify "text-justify"
    text_orientation "text-orientation"
    text_overflow "text-overflow"
    text_shadow "text-shadow"
    text_space_collapse "text-space-collapse"
    text_space_trim "text-space-trim"
    text_spacing "text-spacing"
    text_transform "text-transform"
    text_underline_offset "text-underline-offset"
    text_underline_position "text-underline-position"
    text_wrap "text-wrap"
    top "top"
    transform "transform"
    transform_box "transform-box"
    transform_origin "transform-origin"
    transform_style "transform-style"
    transition "transition"
    transition_delay "transition-delay"
    transition_duration "transition-duration"
    transition_property "transition-property"
    transition_timing_function "transition-timing-function"
    translate "translate"
    unicode_bidi "unicode-bidi"
    user_select "user-select"
    vertical_align "vertical-align"
    visibility "visibility"
    voice_balance "voice-balance"
    voice_duration "voice-duration"
    voice_family "voice-family"
    voice_pitch "voice-pitch"
    voice_range "voice-range"
    voice_rate "voice-rate"
    voice_stress "voice-stress"
    voice_volume "voice-volume"
    volume "volume"
    white_space "white-space"
    widows "widows"
    width "width"
    will_change "will-change"
    word_boundary_detection "word-boundary-detection"
    word_boundary_expansion "word-boundary-expansion"
    word_break "word-break"
    word_spacing "word-spacing"
    word_wrap "word-wrap"
    wrap_after "wrap-after"
    wrap_before "wrap-before"
    wrap_flow "wrap-flow"
    wrap_inside "wrap-inside"
    wrap_through "wrap-through"
    writing_mode "writing-mode"
    z_index "z-index"
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::{css::rule, render::Render};

    #[test]
    fn t_names() {
        assert_eq!(font_weight("bold").label(), "font-weight");
        assert_eq!(continue_("auto").label(), "continue");
        assert_eq!(z_index("2").label(), "z-index");
        let unique: HashSet<_> = PROPERTY_NAMES.iter().collect();
        assert_eq!(unique.len(), PROPERTY_NAMES.len());
    }

    #[test]
    fn t_at_rules() {
        assert_eq!(at_import("url(/some/other.css)").to_html_string(),
                   "@import url(/some/other.css);");
        assert_eq!(at_charset("\"utf-8\"").to_html_string(), "@charset \"utf-8\";");
        assert_eq!(
            at_media("screen and (min-width: 900px)", [
                at_supports("(display: flex)", [
                    rule("body", [color("red")]),
                    rule("p", [color("blue")]),
                ]),
            ]).to_html_string(),
            "@media screen and (min-width: 900px){@supports (display: flex)\
             {body{color:red;}p{color:blue;}}}");
        assert_eq!(at_font_face((), [font_family("x"), src("url(x.woff)")]).to_html_string(),
                   "@font-face{font-family:x;src:url(x.woff);}");
    }
}
