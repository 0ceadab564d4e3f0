//! Daizy Mono - terminal ANSI colors only

pub const THEME: &str = r##"# Daizy Mono theme for daizy
# Inherits the terminal palette; accents map to ANSI slots

[meta]
name = "Daizy Mono"
version = 1
author = "daizy"

[ui]
background = "ansi:bg"
surface = "ansi:bg"
foreground = "ansi:fg"
muted = "ansi:8"
border = "ansi:8"
backdrop = "ansi:0"
border_type = "plain"

[accents]
electric = "ansi:14"
green = "ansi:10"
blue = "ansi:12"
error = "ansi:9"
"##;
