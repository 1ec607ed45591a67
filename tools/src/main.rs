//! ept-calc: headless runner for the EPT productivity calculator.
//!
//! Usage:
//!   ept-calc --role "Service Agent" --cost 45000 --employees 1000 --ept 2.4 --tasks 90 --clicks 20
//!   ept-calc --table
//!   ept-calc --citations
//!   ept-calc --ipc-mode

use anyhow::Result;
use ept_core::{
    citations::Footer,
    config::DisplayConfig,
    ept::EPT_LEVELS,
    form::{FormEdit, FormField, FormState},
    role::Role,
    session::{CalculatorSession, FormInstance},
    types::{Currency, FormId, Seconds},
    CalculationResult, ProductivityEstimator,
};
use serde_json::Value;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    AddForm,
    DeleteForm { id: FormId },
    SetRole { id: FormId, role: String },
    SetField { id: FormId, field: FormField, value: String },
    SetEpt { id: FormId, ept: Seconds },
    Calculate { id: FormId },
    Citations,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    forms: Vec<UiForm<'a>>,
    scroll_to: Option<FormId>,
    total_role_value: Currency,
}

#[derive(serde::Serialize)]
struct UiForm<'a> {
    #[serde(flatten)]
    form: &'a FormInstance,
    deletable: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let display = load_display_config(&args)?;

    if has_flag(&args, "--table") {
        print_table();
    } else if has_flag(&args, "--citations") {
        print_footer(&Footer::current());
    } else if has_flag(&args, "--ipc-mode") {
        run_ipc_loop(CalculatorSession::new())?;
    } else {
        let (state, _) = form_from_args(&args)?;
        let result = state.calculate(&ProductivityEstimator)?;
        if has_flag(&args, "--json") {
            let json = if display.pretty_json {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        } else {
            print_result(&display, &state, &result);
        }
    }

    Ok(())
}

fn load_display_config(args: &[String]) -> Result<DisplayConfig> {
    let data_dir = arg_value(args, "--data-dir").unwrap_or("./data");
    Ok(DisplayConfig::load_or_default(data_dir)?)
}

/// Build a form the way a user would fill it in: role first (which
/// applies its defaults), then each numeric field through the filter.
/// Returns the form and the flags whose values the filter dropped.
fn form_from_args(args: &[String]) -> Result<(FormState, Vec<&'static str>)> {
    let mut state = FormState::default();
    let mut ignored = Vec::new();
    if let Some(role) = arg_value(args, "--role") {
        state = state.with_role(Role::parse(role)?);
    }
    let fields = [
        ("--cost", FormField::Cost),
        ("--employees", FormField::Employees),
        ("--tasks", FormField::ExpectedTasksPerDay),
        ("--clicks", FormField::ClicksPerTask),
    ];
    for (flag, field) in fields {
        if let Some(value) = arg_value(args, flag) {
            let next = state.with_input(field, value);
            if next == state && state.field(field) != value {
                log::warn!("Ignoring {flag} {value:?}: digits only");
                ignored.push(flag);
            }
            state = next;
        }
    }
    if let Some(ept) = arg_value(args, "--ept") {
        let ept: Seconds = ept
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --ept {ept:?}: {e}"))?;
        state = state.with_ept(ept)?;
    }
    Ok((state, ignored))
}

fn run_ipc_loop(mut session: CalculatorSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        match handle_line(&mut session, &buffer) {
            Some(reply) => writeln!(stdout, "{reply}")?,
            None => break,
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Reply to one protocol line. `None` means the host asked to quit.
fn handle_line(session: &mut CalculatorSession, line: &str) -> Option<Value> {
    match serde_json::from_str(line) {
        Ok(cmd) => dispatch(session, cmd),
        Err(e) => Some(error_reply(&e)),
    }
}

fn dispatch(session: &mut CalculatorSession, cmd: IpcCommand) -> Option<Value> {
    let outcome = match cmd {
        IpcCommand::Quit => return None,
        IpcCommand::Citations => return Some(to_reply(&Footer::current())),
        IpcCommand::GetState => Ok(()),
        IpcCommand::AddForm => {
            session.add_form();
            Ok(())
        }
        IpcCommand::DeleteForm { id } => session.delete_form(&id).map(drop),
        IpcCommand::SetRole { id, role } => Role::parse(&role)
            .and_then(|role| session.edit(&id, &FormEdit::SetRole { role }).map(drop)),
        IpcCommand::SetField { id, field, value } => {
            session.edit(&id, &FormEdit::SetField { field, value }).map(drop)
        }
        IpcCommand::SetEpt { id, ept } => {
            session.edit(&id, &FormEdit::SetEpt { ept }).map(drop)
        }
        IpcCommand::Calculate { id } => session.calculate(&id).map(drop),
    };

    Some(match outcome {
        Ok(()) => to_reply(&build_ui_state(session)),
        Err(e) => error_reply(&e),
    })
}

fn to_reply(value: &impl serde::Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| error_reply(&e))
}

fn error_reply(e: &dyn std::fmt::Display) -> Value {
    serde_json::json!({ "error": e.to_string() })
}

fn build_ui_state(session: &mut CalculatorSession) -> UiState<'_> {
    let scroll_to = session.take_scroll_request();
    let session = &*session;
    UiState {
        forms: session
            .forms()
            .iter()
            .map(|form| UiForm { form, deletable: session.is_deletable(&form.id) })
            .collect(),
        scroll_to,
        total_role_value: session.total_role_value(),
    }
}

fn print_table() {
    println!("  EPT (s) | clicks/min");
    println!("  --------+-----------");
    for level in EPT_LEVELS {
        println!("  {:>7.2} | {:>10.2}", level.ept, level.clicks_per_minute);
    }
}

fn print_footer(footer: &Footer) {
    println!("{}", footer.copyright);
    println!();
    println!("=== CITATIONS AND DISCLAIMER ===");
    println!("{}", footer.disclaimer);
    println!();
    for c in footer.citations {
        match c.url {
            Some(url) => println!("  - {} <{url}>", c.text),
            None => println!("  - {}", c.text),
        }
    }
}

fn print_result(display: &DisplayConfig, state: &FormState, r: &CalculationResult) {
    let cur = &display.currency_symbol;
    println!("=== {} ===", r.role);
    println!("  cost/employee:    {cur}{}", r.cost);
    println!("  employees:        {}", r.employees);
    println!("  EPT:              {:.2}s ({:.2} clicks/min)", state.ept, r.clicks_per_minute);
    println!("  max clicks/day:   {:.0}", r.max_clicks_per_day);
    println!("  tasks/day:        {} of {} expected", r.tasks_per_day, r.expected_tasks);
    println!("  productivity:     {:.2}%", r.productivity);
    println!();
    println!("=== VALUE (per employee) ===");
    println!("  expected value:   {cur}{:.0}", r.expected_value);
    println!("  value produced:   {cur}{:.0}", r.value_produced);
    println!("  true cost:        {cur}{:.0}", r.true_cost);
    println!();
    println!("  total role value: {cur}{:.0}", r.total_role_value);
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
