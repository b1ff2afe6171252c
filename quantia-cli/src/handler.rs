//! Request dispatch: one JSON request in, one JSON response out

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use thiserror::Error;
use tracing::debug;
use quantia_core::{ErrorReport, QuantityError};
use quantia_physics::{constants, UnitKind};
use quantia_units::{FormatStyle, Quantity};

/// Error code for requests the engine never saw
const INVALID_REQUEST: &str = "INVALID_REQUEST";

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub op: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Overrides the configured rendering style for this request
    #[serde(default)]
    pub style: Option<FormatStyle>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    pub fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        Response { id, result: Some(result), error: None }
    }

    pub fn err(id: Option<JsonValue>, error: &CliError) -> Self {
        Response { id, result: None, error: Some(error.report()) }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error("'{op}' expects {expected} argument(s), got {got}")]
    ArgCount { op: String, expected: usize, got: usize },

    #[error("Unknown operation '{0}'")]
    UnknownOp(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn report(&self) -> ErrorReport {
        match self {
            CliError::Quantity(e) => e.report(),
            other => ErrorReport { code: INVALID_REQUEST, message: other.to_string() },
        }
    }
}

/// One unit of a quantity, as sent to clients
#[derive(Debug, Serialize)]
pub struct UnitView {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'static str>,
    pub exponent: i32,
}

/// A quantity as sent to clients: structured fields plus its rendering
#[derive(Debug, Serialize)]
pub struct QuantityView {
    pub amount: f64,
    pub units: Vec<UnitView>,
    pub text: String,
}

impl QuantityView {
    pub fn new(quantity: &Quantity, style: FormatStyle) -> Result<Self, CliError> {
        Ok(QuantityView {
            amount: quantity.amount,
            units: quantity
                .units
                .iter()
                .map(|u| UnitView {
                    symbol: u.base.symbol.clone(),
                    prefix: u.prefix.map(|p| p.symbol),
                    exponent: u.exponent,
                })
                .collect(),
            text: quantity.format(true, true, style)?,
        })
    }
}

fn expect_args<'a>(request: &'a Request, expected: usize) -> Result<&'a [String], CliError> {
    if request.args.len() != expected {
        return Err(CliError::ArgCount {
            op: request.op.clone(),
            expected,
            got: request.args.len(),
        });
    }
    Ok(&request.args)
}

fn view(quantity: &Quantity, style: FormatStyle) -> Result<JsonValue, CliError> {
    Ok(serde_json::to_value(QuantityView::new(quantity, style)?)?)
}

fn binary(
    request: &Request,
    style: FormatStyle,
    op: fn(&Quantity, &Quantity) -> quantia_core::Result<Quantity>,
) -> Result<JsonValue, CliError> {
    let args = expect_args(request, 2)?;
    let a = Quantity::parse(&args[0])?;
    let b = Quantity::parse(&args[1])?;
    view(&op(&a, &b)?, style)
}

/// Run one request. `default_style` applies unless the request names its own.
pub fn handle(request: &Request, default_style: FormatStyle) -> Result<JsonValue, CliError> {
    let style = request.style.unwrap_or(default_style);
    debug!(op = %request.op, args = request.args.len(), ?style, "handling request");

    match request.op.as_str() {
        "parse" => {
            let args = expect_args(request, 1)?;
            view(&Quantity::parse(&args[0])?, style)
        }
        "reduce" => {
            let args = expect_args(request, 1)?;
            view(&Quantity::parse(&args[0])?.reduce()?, style)
        }
        "add" => binary(request, style, Quantity::add),
        "subtract" => binary(request, style, Quantity::subtract),
        "multiply" => binary(request, style, Quantity::multiply),
        "divide" => binary(request, style, Quantity::divide),
        "pow" => {
            let args = expect_args(request, 2)?;
            let exponent: i32 = args[1].trim().parse().map_err(|_| {
                CliError::InvalidArgument(format!("'{}' is not an integer exponent", args[1]))
            })?;
            view(&Quantity::parse(&args[0])?.pow(exponent)?, style)
        }
        "convert" => {
            let args = expect_args(request, 2)?;
            view(&Quantity::parse(&args[0])?.convert(&args[1])?, style)
        }
        "compatible" => {
            let args = expect_args(request, 2)?;
            let a = Quantity::parse(&args[0])?;
            let b = Quantity::parse(&args[1])?;
            Ok(json!(a.has_compatible_units(&b)?))
        }
        "format" => {
            let (text, parts) = match request.args.as_slice() {
                [text] => (text, "both"),
                [text, parts] => (text, parts.as_str()),
                args => {
                    return Err(CliError::ArgCount {
                        op: request.op.clone(),
                        expected: 1,
                        got: args.len(),
                    })
                }
            };
            let (amount, units) = match parts {
                "both" => (true, true),
                "amount" => (true, false),
                "units" => (false, true),
                "none" => (false, false),
                other => {
                    return Err(CliError::InvalidArgument(format!(
                        "'{}' is not one of both, amount, units, none",
                        other
                    )))
                }
            };
            Ok(json!(Quantity::parse(text)?.format(amount, units, style)?))
        }
        "kind" => {
            let args = expect_args(request, 1)?;
            let kind = UnitKind::classify(&Quantity::parse(&args[0])?)?;
            Ok(serde_json::to_value(kind)?)
        }
        "constant" => {
            let args = expect_args(request, 1)?;
            let quantity = constants::by_name(&args[0]).ok_or_else(|| {
                CliError::InvalidArgument(format!(
                    "Unknown constant '{}'. Known: {}",
                    args[0],
                    constants::NAMES.join(", ")
                ))
            })?;
            view(quantity, style)
        }
        other => Err(CliError::UnknownOp(other.to_string())),
    }
}

/// Parse and run one input line, always producing a response
pub fn handle_line(line: &str, default_style: FormatStyle) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return Response::err(None, &CliError::Json(e)),
    };
    match handle(&request, default_style) {
        Ok(result) => Response::ok(request.id, result),
        Err(e) => {
            debug!(op = %request.op, error = %e, "request failed");
            Response::err(request.id, &e)
        }
    }
}
