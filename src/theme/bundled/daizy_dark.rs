//! Daizy Dark - near-black page with the electric blue accent

pub const THEME: &str = r##"# Daizy Dark theme for daizy
# Near-black page, white type, electric blue accent

[meta]
name = "Daizy Dark"
version = 1
author = "daizy"

[ui]
background = "#0a0a0a"
surface = "#1a1a1a"
foreground = "#ffffff"
muted = "#9ca3af"
border = "#2a2a2a"
backdrop = "#050505"
border_type = "rounded"

[accents]
electric = "#00BFFF"
green = "#4ade80"
blue = "#60a5fa"
error = "#f87171"
"##;
