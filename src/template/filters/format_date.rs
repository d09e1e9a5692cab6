use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::FilterReflection;
use liquid_core::{Result as LiquidResult, Runtime, Value, ValueView};

use crate::front_matter::deserializers::parse_date;

/// Human readable layout produced by `format_date`, e.g. `Jan 02 2024`
pub const FORMAT_DATE_LAYOUT: &str = "%b %d %Y";

/// FormatDate filter implementation
#[derive(Debug, Clone)]
pub struct FormatDateFilter;

impl fmt::Display for FormatDateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format_date")
    }
}

impl liquid_core::Filter for FormatDateFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let date_str = input.to_kstr().to_string();

        match parse_date(&date_str) {
            Some(date) => Ok(Value::scalar(date.format(FORMAT_DATE_LAYOUT).to_string())),
            // If can't parse, return the original string
            None => Ok(Value::scalar(date_str)),
        }
    }
}

/// Parse filter factory for format_date
#[derive(Debug, Clone)]
pub struct FormatDateFilterParser;

impl FilterReflection for FormatDateFilterParser {
    fn name(&self) -> &str {
        "format_date"
    }

    fn description(&self) -> &str {
        "Formats a raw page date as `Jan 02 2006`"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for FormatDateFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(FormatDateFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
