pub use crate::format::OutputFormat;
use clap::ValueEnum;

// Implement ValueEnum for OutputFormat to work with clap
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Records,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        use clap::builder::PossibleValue;
        Some(match self {
            OutputFormat::Human => PossibleValue::new("human").help("Readable output for terminals"),
            OutputFormat::Json => PossibleValue::new("json").help("Machine-readable JSON"),
            OutputFormat::Records => PossibleValue::new("records").help("One fact per line"),
        })
    }
}
