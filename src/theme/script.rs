//! Client-side JavaScript for server-rendered pages.
//!
//! `init_script` goes in the head and runs before first paint so a dark
//! preference never flashes light. `toggle_script` goes at the end of a page
//! that is not hydrated by the Dioxus client and wires the toggle itself.

use super::{Glyph, Theme, ThemeSettings, SETTINGS_ELEMENT_ID};

/// Build the inline head script for `settings`.
///
/// Only the root marker is applied here; the toggle element does not exist
/// yet, so its glyph is set by the controller or by [`toggle_script`].
pub fn init_script(settings: &ThemeSettings) -> String {
    let key = js_string(&settings.storage_key);
    let attribute = js_string(&settings.attribute);
    let dark = js_string(&settings.dark_value);
    let dark_stored = js_string(Theme::Dark.as_str());

    format!(
        r#"
(function(){{
    var t = null;
    try {{ t = localStorage.getItem({key}); }} catch (e) {{}}
    if (t === {dark_stored}) document.documentElement.setAttribute({attribute}, {dark});
    else document.documentElement.removeAttribute({attribute});
}})();
"#
    )
}

/// Build the toggle wiring for a plain server-rendered page.
///
/// On load it applies the stored preference to the root marker and the
/// toggle glyph; each click flips the marker, persists the new value and
/// swaps the glyph. Storage failures leave the page toggling unpersisted.
/// Must not be combined with the hydrated `ThemeToggle` component, which
/// handles clicks itself.
pub fn toggle_script(settings: &ThemeSettings) -> String {
    let key = js_string(&settings.storage_key);
    let attribute = js_string(&settings.attribute);
    let dark = js_string(&settings.dark_value);
    let toggle_id = js_string(&settings.toggle_id);
    let dark_stored = js_string(Theme::Dark.as_str());
    let light_stored = js_string(Theme::Light.as_str());
    let sun = js_string(&Glyph::Sun.markup());
    let moon = js_string(&Glyph::Moon.markup());
    let sun_label = js_string(Glyph::Sun.label());
    let moon_label = js_string(Glyph::Moon.label());

    format!(
        r#"
(function(){{
    function load() {{ try {{ return localStorage.getItem({key}); }} catch (e) {{ return null; }} }}
    function save(v) {{ try {{ localStorage.setItem({key}, v); }} catch (e) {{}} }}
    function wire() {{
        var toggle = document.getElementById({toggle_id});
        if (!toggle) return;
        var root = document.documentElement;
        function show(isDark) {{
            toggle.innerHTML = isDark ? {sun} : {moon};
            var label = isDark ? {sun_label} : {moon_label};
            toggle.setAttribute('aria-label', label);
            toggle.setAttribute('title', label);
        }}
        if (load() === {dark_stored}) {{ root.setAttribute({attribute}, {dark}); show(true); }}
        else {{ root.removeAttribute({attribute}); show(false); }}
        toggle.addEventListener('click', function() {{
            if (root.hasAttribute({attribute})) {{
                root.removeAttribute({attribute});
                save({light_stored});
                show(false);
            }} else {{
                root.setAttribute({attribute}, {dark});
                save({dark_stored});
                show(true);
            }}
        }});
    }}
    if (document.readyState === 'loading') document.addEventListener('DOMContentLoaded', wire);
    else wire();
}})();
"#
    )
}

/// JSON data element carrying `settings` to the browser, read back by the
/// client app so both sides use the same key and attribute.
pub fn settings_element(settings: &ThemeSettings) -> String {
    // Serializing a struct of strings cannot fail
    let json = serde_json::to_string(settings)
        .unwrap_or_default()
        .replace("</", "<\\/");
    format!(r#"<script id="{SETTINGS_ELEMENT_ID}" type="application/json">{json}</script>"#)
}

/// JSON string literals are valid JavaScript string literals. `</` is split
/// so a value can never close the surrounding script element.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_uses_bootstrap_attribute() {
        let script = init_script(&ThemeSettings::default());
        assert!(script.contains(r#"localStorage.getItem("theme")"#));
        assert!(script.contains(r#"setAttribute("data-bs-theme", "dark")"#));
        assert!(script.contains(r#"removeAttribute("data-bs-theme")"#));
        assert!(script.contains(r#"t === "dark""#));
    }

    #[test]
    fn test_values_are_escaped() {
        let settings = ThemeSettings {
            storage_key: r#"a"b</script>"#.to_string(),
            ..ThemeSettings::default()
        };
        for script in [
            init_script(&settings),
            toggle_script(&settings),
            settings_element(&settings),
        ] {
            assert!(script.contains(r#"a\"b<\/script>"#));
            let closing = usize::from(script.starts_with("<script"));
            assert_eq!(script.matches("</script>").count(), closing);
        }
    }

    #[test]
    fn test_toggle_script_wires_clicks() {
        let script = toggle_script(&ThemeSettings::default());
        assert!(script.contains(r#"document.getElementById("themeToggle")"#));
        assert!(script.contains("toggle.addEventListener('click'"));
        assert!(script.contains(r#"root.hasAttribute("data-bs-theme")"#));
        assert!(script.contains(r#"save("light")"#));
        assert!(script.contains(r#"save("dark")"#));
        assert!(script.contains("DOMContentLoaded"));
    }

    #[test]
    fn test_toggle_script_glyph_follows_marker() {
        let script = toggle_script(&ThemeSettings::default());
        // Sun is shown exactly where the marker is set, moon where removed
        assert!(script.contains(
            r#"if (load() === "dark") { root.setAttribute("data-bs-theme", "dark"); show(true); }"#
        ));
        assert!(script.contains(r#"else { root.removeAttribute("data-bs-theme"); show(false); }"#));
        assert!(script.contains(
            r#"isDark ? "<i class=\"fas fa-sun\"><\/i>" : "<i class=\"fas fa-moon\"><\/i>""#
        ));
    }

    #[test]
    fn test_settings_element_round_trips() {
        let settings = ThemeSettings {
            storage_key: "site-theme".to_string(),
            attribute: "data-theme".to_string(),
            ..ThemeSettings::default()
        };
        let element = settings_element(&settings);
        let json = element
            .strip_prefix(r#"<script id="theme-settings" type="application/json">"#)
            .and_then(|rest| rest.strip_suffix("</script>"))
            .unwrap();
        let parsed: ThemeSettings = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, settings);
    }
}
