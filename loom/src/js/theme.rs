use crate::styling::theme::ThemeVariant;

/// Emits the runtime theme script: restores the persisted variant class on the
/// document root, and wires the `#theme-toggle` button to cycle variants.
/// Switching is a single class swap; no style recomputation happens because
/// color values are indirected through custom properties.
pub fn theme_toggle_js(default_variant: &ThemeVariant, variants: &[&ThemeVariant]) -> String {
    let classes = variants
        .iter()
        .map(|variant| format!("\"{}\"", variant.class_name()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"// ---- Theme Configuration ----
const DEFAULT_THEME = "{default_class}";
const THEME_COOKIE = "ltheme";
const THEMES = [{classes}];

function getCookie(name) {{
    const match = document.cookie.match(new RegExp("(?:^|; )" + name + "=([^;]*)"));
    return match ? decodeURIComponent(match[1]) : null;
}}

function setCookie(name, value) {{
    document.cookie = name + "=" + encodeURIComponent(value) + "; path=/; max-age=31536000";
}}

function currentTheme() {{
    let theme = getCookie(THEME_COOKIE);
    if (!theme || !THEMES.includes(theme)) {{
        theme = DEFAULT_THEME;
        setCookie(THEME_COOKIE, theme);
    }}
    return theme;
}}

function applyTheme(theme) {{
    const root = document.documentElement;
    THEMES.forEach((cls) => root.classList.remove(cls));
    root.classList.add(theme);
    const toggle = document.getElementById("theme-toggle");
    if (toggle) {{
        toggle.dataset.colorScheme = theme.replace("theme-", "");
    }}
}}

function nextTheme(theme) {{
    const index = THEMES.indexOf(theme);
    return THEMES[(index + 1) % THEMES.length];
}}

document.addEventListener("DOMContentLoaded", () => {{
    applyTheme(currentTheme());
    const toggle = document.getElementById("theme-toggle");
    if (toggle) {{
        toggle.addEventListener("click", () => {{
            const theme = nextTheme(currentTheme());
            setCookie(THEME_COOKIE, theme);
            applyTheme(theme);
        }});
    }}
}});"#,
        default_class = default_variant.class_name(),
    )
}

/// A head-inlined bootstrap that applies the persisted theme class before
/// first paint, avoiding a flash of the default theme.
pub fn theme_boot_js(default_variant: &ThemeVariant) -> String {
    format!(
        r#"(function () {{
    const match = document.cookie.match(/(?:^|; )ltheme=([^;]*)/);
    const theme = match ? decodeURIComponent(match[1]) : "{default_class}";
    document.documentElement.classList.add(theme);
}})();"#,
        default_class = default_variant.class_name(),
    )
}
