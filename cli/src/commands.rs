use crate::global_settings::GlobalSettings;
use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use log::info;
use ranges_lib::{contained_by, BoundsSpec, Interval, Scalar};
use serde::Serialize;

/// Everything we know about a range, as shown by `info` and by `--json`
#[derive(Serialize)]
struct RangeInfo<T> {
    literal: String,
    payload: String,
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
    is_empty: bool,
}

impl<T: Scalar> RangeInfo<T> {
    fn new(range: &Interval<T>) -> Self {
        RangeInfo {
            literal: range.to_string(),
            payload: hex::encode(range.encode()),
            lower: range.lower(),
            upper: range.upper(),
            lower_inclusive: range.lower_inclusive(),
            upper_inclusive: range.upper_inclusive(),
            is_empty: range.is_empty(),
        }
    }
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument {}", name))
}

fn range_arg<T: Scalar>(args: &ArgMatches, name: &str) -> Result<Interval<T>> {
    Ok(Interval::<T>::parse(required(args, name)?)?)
}

fn scalar_arg<T: Scalar>(args: &ArgMatches, name: &str) -> Result<T> {
    let text = required(args, name)?;
    T::parse_scalar(text)
        .ok_or_else(|| anyhow!("Invalid {} bound: \"{}\"", T::RANGE_NAME, text))
}

fn show_range<T: Scalar + Serialize>(
    range: &Interval<T>,
    settings: &GlobalSettings,
) -> Result<String> {
    if settings.json {
        Ok(serde_json::to_string_pretty(&RangeInfo::new(range))?)
    } else {
        Ok(range.to_string())
    }
}

fn show_bool(value: bool) -> String {
    //  same text for plain and JSON output
    value.to_string()
}

/// Execute one subcommand on ranges of the given domain, and return the
/// text to display.
pub(crate) fn run<T: Scalar + Serialize>(
    name: &str,
    args: &ArgMatches,
    settings: &GlobalSettings,
) -> Result<String> {
    info!("running {} on {}", name, T::RANGE_NAME);
    match name {
        "parse" => {
            let range = range_arg::<T>(args, "LITERAL")?;
            if settings.json {
                return show_range(&range, settings);
            }
            Ok(format!("{} {}", range, hex::encode(range.encode())))
        }
        "make" => {
            let lower = scalar_arg::<T>(args, "LOWER")?;
            let upper = scalar_arg::<T>(args, "UPPER")?;
            let bounds = required(args, "BOUNDS")?.parse::<BoundsSpec>()?;
            show_range(&Interval::with_bounds(lower, upper, bounds), settings)
        }
        "encode" => {
            let payload = hex::encode(range_arg::<T>(args, "LITERAL")?.encode());
            if settings.json {
                Ok(serde_json::to_string(&payload)?)
            } else {
                Ok(payload)
            }
        }
        "decode" => {
            let text = required(args, "PAYLOAD")?;
            let payload = hex::decode(text)
                .with_context(|| format!("Invalid hexadecimal payload {}", text))?;
            show_range(&Interval::<T>::decode(&payload)?, settings)
        }
        "info" => {
            let range = range_arg::<T>(args, "LITERAL")?;
            if settings.json {
                return show_range(&range, settings);
            }
            let info = RangeInfo::new(&range);
            Ok(format!(
                "literal:         {}\n\
                 payload:         {}\n\
                 lower:           {}\n\
                 upper:           {}\n\
                 lower_inclusive: {}\n\
                 upper_inclusive: {}\n\
                 is_empty:        {}",
                info.literal,
                info.payload,
                info.lower,
                info.upper,
                info.lower_inclusive,
                info.upper_inclusive,
                info.is_empty,
            ))
        }
        "overlaps" => {
            let left = range_arg::<T>(args, "LEFT")?;
            let right = range_arg::<T>(args, "RIGHT")?;
            Ok(show_bool(left.overlaps(&right)))
        }
        "contains" => {
            let range = range_arg::<T>(args, "RANGE")?;
            let value = scalar_arg::<T>(args, "VALUE")?;
            Ok(show_bool(range.contains(&value)))
        }
        "contained-by" => {
            let value = scalar_arg::<T>(args, "VALUE")?;
            let range = range_arg::<T>(args, "RANGE")?;
            Ok(show_bool(contained_by(&value, &range)))
        }
        _ => bail!("Unknown command {}", name),
    }
}
