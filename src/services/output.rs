use crate::domain::models::{ErrorDetail, ErrorOut, JsonOut};
use crate::error::GateError;
use serde::Serialize;

pub fn print_lines<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One diagnostic per failed run: a JSON envelope on stdout under `--json`,
/// otherwise a single `error[CODE]: ...` line on stderr.
pub fn print_failure(json: bool, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<GateError>()
        .map(GateError::code)
        .unwrap_or("ERROR");
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: err.to_string(),
            },
        };
        let body = serde_json::to_string_pretty(&out)
            .unwrap_or_else(|_| "{\"ok\": false}".to_string());
        println!("{body}");
    } else {
        eprintln!("error[{code}]: {err}");
    }
}
