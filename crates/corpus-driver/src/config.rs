use std::str::FromStr;

/// Configuration for rendering decoded cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
}

/// Output format for one decoded case.
///
/// ```text
/// ┌──────────┬─────────────────────────────────────────────────────────┐
/// │ Mode     │ Output                                                  │
/// ├──────────┼─────────────────────────────────────────────────────────┤
/// │ Plain    │ 1 << 2                                                  │
/// │          │ Decimal only, one line per case (default).              │
/// ├──────────┼─────────────────────────────────────────────────────────┤
/// │ Detailed │ corpus/crash-1 [arg_size=32]                            │
/// │          │   1 << 2                                                │
/// │          │   x = 0x00..01                                          │
/// │          │   y = 0x00..02                                          │
/// │          │ Source path, width, and full-width hex for triage.      │
/// ├──────────┼─────────────────────────────────────────────────────────┤
/// │ Json     │ {"path":..,"arg_size":32,"op":"<<","x":"1",..}          │
/// │          │ One object per line, values as decimal strings.         │
/// └──────────┴─────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Plain,
    Detailed,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "detailed" | "detail" => Ok(Self::Detailed),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown mode {s:?}, expected plain|detailed|json")),
        }
    }
}
