use crate::domain::JsonOut;
use serde::Serialize;

fn emit_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// One line per item in text mode, a single `{"ok":true,"data":[...]}` in JSON mode.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    println!("{}", text(&data));
    Ok(())
}
