use clap::Parser;

/// lighten — scale the lightness of a hex color.
///
/// Prints the adjusted color as lowercase #rrggbb. A color that does
/// not parse is echoed back with a # prefix so pipelines always get a
/// hex-shaped value.
#[derive(Parser, Debug)]
#[command(name = "lighten", version, about)]
pub struct Args {
    /// 6-digit hex color, with or without a leading '#' (e.g. #336699).
    pub color: String,

    /// Lightness multiplier: >1.0 brightens, <1.0 darkens (e.g. 1.2).
    ///
    /// Kept as a string here so a non-numeric value is reported as a
    /// factor error rather than a usage error.
    #[arg(allow_hyphen_values = true)]
    pub factor: String,
}

pub fn try_parse() -> Result<Args, clap::Error> {
    Args::try_parse()
}
