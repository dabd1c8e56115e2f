//! `winbind` command line: constant lookups, status code translation and
//! procedure table inspection.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::co::{self, ConstKind, ConstMatch};
use crate::dll::tables;
use crate::error::{Error, Result};
use crate::utils::remove_accel_ampersands;

pub const USAGE: &str = "\
Usage: winbind [--json] <command>

Commands:
  lookup NAME...          Value of each constant (a bare NAME works too)
  name TYPE VALUE         Constant name(s) for a value of TYPE
  error CODE              Win32 error name, message and HRESULT form
  hresult VALUE           HRESULT severity, facility and code
  strip-accel TEXT        Remove accelerator ampersands
  procs [DLL] [--resolve] List procedure tables, optionally resolving them
  help                    Show this message

Numbers may be decimal, negative or 0x-prefixed hex.";

pub const EXIT_OK: i32 = 0;
pub const EXIT_NO_MATCH: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(Vec<String>),
    Name { type_name: String, value: i64 },
    Error(String),
    Hresult(String),
    StripAccel(String),
    Procs { dll: Option<String>, resolve: bool },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub json: bool,
    pub command: Command,
}

/// Parses decimal, negative decimal and `0x` hex.
pub fn parse_number(s: &str) -> Option<i64> {
    let s = s.trim();
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let value = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    Some(if neg { -value } else { value })
}

/// Parses arguments, without the program name.
pub fn parse_args<I, S>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut json = false;
    let mut resolve = false;
    let mut words = Vec::new();
    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "--json" => json = true,
            "--resolve" => resolve = true,
            "-h" | "--help" => words.insert(0, "help".to_string()),
            _ => words.push(arg),
        }
    }

    let usage = |msg: &str| Error::InvalidArgument(msg.to_string());
    let mut words = words.into_iter();
    let command = match words.next().as_deref() {
        None | Some("help") => Command::Help,
        Some("lookup") => {
            let names: Vec<String> = words.collect();
            if names.is_empty() {
                return Err(usage("lookup needs at least one NAME"));
            }
            Command::Lookup(names)
        }
        Some("name") => {
            let (Some(type_name), Some(value), None) = (words.next(), words.next(), words.next()) else {
                return Err(usage("name takes TYPE VALUE"));
            };
            let value = parse_number(&value).ok_or_else(|| usage(&format!("not a number: {value}")))?;
            Command::Name { type_name, value }
        }
        Some("error") => match (words.next(), words.next()) {
            (Some(code), None) => Command::Error(code),
            _ => return Err(usage("error takes one CODE")),
        },
        Some("hresult") => match (words.next(), words.next()) {
            (Some(value), None) => Command::Hresult(value),
            _ => return Err(usage("hresult takes one VALUE")),
        },
        Some("strip-accel") => {
            let text: Vec<String> = words.collect();
            if text.is_empty() {
                return Err(usage("strip-accel needs TEXT"));
            }
            Command::StripAccel(text.join(" "))
        }
        Some("procs") => match (words.next(), words.next()) {
            (dll, None) => Command::Procs { dll, resolve },
            _ => return Err(usage("procs takes at most one DLL")),
        },
        Some(other) if other.starts_with('-') => return Err(usage(&format!("unknown option {other}"))),
        Some(first) => Command::Lookup(std::iter::once(first.to_string()).chain(words).collect()),
    };

    if resolve && !matches!(command, Command::Procs { .. }) {
        return Err(usage("--resolve only applies to procs"));
    }
    Ok(Cli { json, command })
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub query: String,
    pub matches: Vec<ConstMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameReport {
    pub type_name: &'static str,
    pub kind: ConstKind,
    pub value: i64,
    pub names: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: u32,
    pub name: Option<String>,
    pub description: String,
    pub hresult: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HresultReport {
    pub value: String,
    pub name: Option<String>,
    pub succeeded: bool,
    pub severity: String,
    pub facility: String,
    pub code: u16,
    pub win32: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcReport {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub dll: &'static str,
    pub procs: Vec<ProcReport>,
}

/// Result of one command, printable as text or JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Lookup(Vec<LookupResult>),
    Name(NameReport),
    Error(ErrorReport),
    Hresult(HresultReport),
    Text { text: String },
    Procs(Vec<TableReport>),
    Help { usage: &'static str },
}

impl Report {
    /// Whether the command found what it was asked for.
    pub fn matched(&self) -> bool {
        match self {
            Report::Lookup(results) => results.iter().all(|r| !r.matches.is_empty()),
            Report::Error(e) => e.name.is_some(),
            _ => true,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Lookup(results) => {
                for r in results {
                    if r.matches.is_empty() {
                        writeln!(f, "{}: no match", r.query)?;
                    }
                    for m in &r.matches {
                        writeln!(f, "{m}")?;
                    }
                }
                Ok(())
            }
            Report::Name(n) if n.value < 0 => {
                writeln!(f, "{} -{:#x} = {}", n.type_name, n.value.unsigned_abs(), n.names)
            }
            Report::Name(n) => writeln!(f, "{} {:#x} = {}", n.type_name, n.value, n.names),
            Report::Error(e) => {
                writeln!(f, "{} ({})", e.name.as_deref().unwrap_or("unknown error"), e.code)?;
                writeln!(f, "  {}", e.description)?;
                writeln!(f, "  HRESULT {}", e.hresult)
            }
            Report::Hresult(h) => {
                writeln!(f, "{} {}", h.value, h.name.as_deref().unwrap_or(""))?;
                writeln!(f, "  severity {}", h.severity)?;
                writeln!(f, "  facility {}", h.facility)?;
                writeln!(f, "  code     {:#06x} ({})", h.code, h.code)?;
                if let Some(w) = &h.win32 {
                    writeln!(f, "  win32    {w}")?;
                }
                Ok(())
            }
            Report::Text { text } => writeln!(f, "{text}"),
            Report::Procs(tables) => {
                for t in tables {
                    writeln!(f, "{}", t.dll)?;
                    for p in &t.procs {
                        match (&p.address, &p.error) {
                            (Some(a), _) => writeln!(f, "  {:<28} {a}", p.name)?,
                            (None, Some(e)) => writeln!(f, "  {:<28} {e}", p.name)?,
                            (None, None) => writeln!(f, "  {}", p.name)?,
                        }
                    }
                }
                Ok(())
            }
            Report::Help { usage } => writeln!(f, "{usage}"),
        }
    }
}

/// Strips an optional `ERROR_` prefix before matching a declared name.
fn parse_error_code(arg: &str) -> Result<co::ERROR> {
    if let Some(n) = parse_number(arg) {
        return u32::try_from(n)
            .map(co::ERROR::from_raw)
            .map_err(|_| Error::InvalidArgument(format!("error code out of range: {arg}")));
    }
    let upper = arg.trim().to_ascii_uppercase();
    let name = upper.strip_prefix("ERROR_").unwrap_or(&upper);
    co::ERROR::from_name(name).ok_or_else(|| Error::UnknownConstant(arg.to_string()))
}

/// Accepts the signed and unsigned spellings of a 32-bit value, or a name.
fn parse_hresult(arg: &str) -> Result<co::HRESULT> {
    if let Some(n) = parse_number(arg) {
        return if let Ok(v) = u32::try_from(n) {
            Ok(co::HRESULT::from_raw(v))
        } else if let Ok(v) = i32::try_from(n) {
            Ok(co::HRESULT::from_i32(v))
        } else {
            Err(Error::InvalidArgument(format!("HRESULT out of range: {arg}")))
        };
    }
    co::HRESULT::from_name(arg.trim()).ok_or_else(|| Error::UnknownConstant(arg.to_string()))
}

fn procs_report(dll: Option<&str>, resolve: bool) -> Result<Report> {
    let selected: Vec<_> = match dll {
        Some(name) => vec![tables::by_name(name).ok_or_else(|| Error::UnknownDll(name.to_string()))?],
        None => tables::ALL.to_vec(),
    };
    let reports = selected
        .into_iter()
        .map(|t| TableReport {
            dll: t.name(),
            procs: t
                .procs
                .iter()
                .map(|p| {
                    let (address, error) = if !resolve {
                        (None, None)
                    } else {
                        match p.address() {
                            Ok(a) => (Some(format!("{:#x}", a.get())), None),
                            Err(e) => (None, Some(e.to_string())),
                        }
                    };
                    ProcReport { name: p.name(), address, error }
                })
                .collect(),
        })
        .collect();
    Ok(Report::Procs(reports))
}

pub fn execute(command: &Command) -> Result<Report> {
    Ok(match command {
        Command::Help => Report::Help { usage: USAGE },
        Command::Lookup(names) => Report::Lookup(
            names
                .iter()
                .map(|q| LookupResult { query: q.clone(), matches: co::lookup(q) })
                .collect(),
        ),
        Command::Name { type_name, value } => {
            let table = co::table(type_name).ok_or_else(|| Error::UnknownType(type_name.clone()))?;
            let value = table.normalize(*value);
            Report::Name(NameReport {
                type_name: table.type_name,
                kind: table.kind,
                value,
                names: table.describe(value),
            })
        }
        Command::Error(arg) => {
            let err = parse_error_code(arg)?;
            Report::Error(ErrorReport {
                code: err.raw(),
                name: err.name().map(|n| format!("ERROR_{n}")),
                description: err.description(),
                hresult: format!("{:#010x}", err.to_hresult().raw()),
            })
        }
        Command::Hresult(arg) => {
            let hr = parse_hresult(arg)?;
            Report::Hresult(HresultReport {
                value: format!("{:#010x}", hr.raw()),
                name: hr.name().map(String::from),
                succeeded: hr.succeeded(),
                severity: hr.severity().to_string(),
                facility: hr.facility().to_string(),
                code: hr.code(),
                win32: hr.to_win32().map(|e| e.to_string()),
            })
        }
        Command::StripAccel(text) => Report::Text { text: remove_accel_ampersands(text) },
        Command::Procs { dll, resolve } => procs_report(dll.as_deref(), *resolve)?,
    })
}

/// Runs one invocation and returns the process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = writeln!(err, "winbind: {e}\n\n{USAGE}");
            return EXIT_USAGE;
        }
    };

    let report = match execute(&cli.command) {
        Ok(report) => report,
        Err(e @ (Error::UnknownConstant(_) | Error::UnknownDll(_))) => {
            let _ = writeln!(err, "winbind: {e}");
            return EXIT_NO_MATCH;
        }
        Err(e) => {
            let _ = writeln!(err, "winbind: {e}");
            return EXIT_USAGE;
        }
    };

    let written = if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => writeln!(out, "{s}"),
            Err(e) => {
                let _ = writeln!(err, "winbind: {e}");
                return EXIT_USAGE;
            }
        }
    } else {
        write!(out, "{report}")
    };
    if let Err(e) = written {
        log::error!("Failed to write output: {e}");
    }

    if report.matched() { EXIT_OK } else { EXIT_NO_MATCH }
}
