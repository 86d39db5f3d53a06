use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use star_it::dynamic::{ops, Builtins, Callable, Value};
use star_it::logging;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "star-it",
    about = "Lazy sequence operations over JSON values",
    version
)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Sequence plus a named builtin function.
#[derive(Args, Debug)]
struct WithFunction {
    /// Input sequence as JSON (array or string).
    seq: String,
    /// Builtin function name (see `star-it functions`).
    function: String,
}

/// Sequence plus a JSON value to search for.
#[derive(Args, Debug)]
struct WithValue {
    /// Input sequence as JSON (array or string).
    seq: String,
    /// Value to look for, as JSON.
    value: String,
}

/// Sequence plus an element count.
#[derive(Args, Debug)]
struct WithCount {
    /// Input sequence as JSON (array or string).
    seq: String,
    /// Number of elements, as JSON.
    count: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Whether every element satisfies the predicate.
    Every(WithFunction),
    /// Whether some element satisfies the predicate.
    Some(WithFunction),
    /// Elements satisfying the predicate.
    Filter(WithFunction),
    /// First element satisfying the predicate, or null.
    Find(WithFunction),
    /// Position of the first element satisfying the predicate, or -1.
    FindIndex(WithFunction),
    /// Call the function on each element, printing each result.
    ForEach(WithFunction),
    /// Whether some element equals the value.
    Includes(WithValue),
    /// Position of the first element equal to the value, or -1.
    IndexOf(WithValue),
    /// Position of the last element equal to the value, or -1.
    LastIndexOf(WithValue),
    /// The function applied to each element.
    Map(WithFunction),
    /// Left fold with a two-argument function.
    Reduce {
        #[command(flatten)]
        args: WithFunction,
        /// Initial accumulator, as JSON. Without it the first element seeds the fold.
        #[arg(long)]
        initial: Option<String>,
    },
    /// Elements after the first `count`.
    Skip(WithCount),
    /// At most the first `count` elements.
    Take(WithCount),
    /// List the builtin functions.
    Functions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = run(cli.command, &Builtins::standard())?;
    println!("{}", output);
    Ok(())
}

fn run(command: Commands, builtins: &Builtins) -> Result<String> {
    debug!(?command, "dispatching");
    let result = match command {
        Commands::Every(args) => {
            let (seq, f) = with_function(&args, builtins)?;
            Value::Bool(ops::every(&seq, &f).context("every failed")?)
        }
        Commands::Some(args) => {
            let (seq, f) = with_function(&args, builtins)?;
            Value::Bool(ops::some(&seq, &f).context("some failed")?)
        }
        Commands::Filter(args) => {
            let (seq, f) = with_function(&args, builtins)?;
            ops::filter(&seq, &f).context("filter failed")?
        }
        Commands::Find(args) => {
            let (seq, f) = with_function(&args, builtins)?;
            ops::find(&seq, &f).context("find failed")?
        }
        Commands::FindIndex(args) => {
            let (seq, f) = with_function(&args, builtins)?;
            Value::Int(ops::find_index(&seq, &f).context("find-index failed")?)
        }
        Commands::ForEach(args) => return for_each(&args, builtins),
        Commands::Includes(args) => {
            let (seq, value) = with_value(&args)?;
            Value::Bool(ops::includes(&seq, &value).context("includes failed")?)
        }
        Commands::IndexOf(args) => {
            let (seq, value) = with_value(&args)?;
            Value::Int(ops::index_of(&seq, &value).context("index-of failed")?)
        }
        Commands::LastIndexOf(args) => {
            let (seq, value) = with_value(&args)?;
            Value::Int(ops::last_index_of(&seq, &value).context("last-index-of failed")?)
        }
        Commands::Map(args) => {
            let (seq, f) = with_function(&args, builtins)?;
            ops::map(&seq, &f).context("map failed")?
        }
        Commands::Reduce { args, initial } => {
            let (seq, f) = with_function(&args, builtins)?;
            let initial = initial.as_deref().map(parse_json).transpose()?;
            ops::reduce(&seq, &f, initial.as_ref()).context("reduce failed")?
        }
        Commands::Skip(args) => {
            let (seq, count) = with_count(&args)?;
            ops::skip(&seq, &count).context("skip failed")?
        }
        Commands::Take(args) => {
            let (seq, count) = with_count(&args)?;
            ops::take(&seq, &count).context("take failed")?
        }
        Commands::Functions => {
            return serde_json::to_string_pretty(&builtins.list())
                .context("failed to render function list");
        }
    };
    render(&result)
}

/// Runs `for_each`, collecting what the function returns for each element
/// so the results can be printed one per line.
fn for_each(args: &WithFunction, builtins: &Builtins) -> Result<String> {
    let (seq, f) = with_function(args, builtins)?;
    let results = Rc::new(RefCell::new(Vec::new()));

    let sink = match &f {
        Value::Func(inner) if inner.arity() == 1 => {
            let inner = inner.clone();
            let name = inner.name().to_string();
            let results = Rc::clone(&results);
            Value::Func(Callable::unary(&name, move |element| {
                let returned = inner.call(&[element.clone()]);
                results.borrow_mut().push(returned.clone());
                returned
            }))
        }
        // Let the callable contract reject it.
        other => other.clone(),
    };
    ops::for_each(&seq, &sink).context("for-each failed")?;

    let lines = results
        .borrow()
        .iter()
        .map(render)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

fn with_function(args: &WithFunction, builtins: &Builtins) -> Result<(Value, Value)> {
    Ok((parse_json(&args.seq)?, builtins.resolve(&args.function)))
}

fn with_value(args: &WithValue) -> Result<(Value, Value)> {
    Ok((parse_json(&args.seq)?, parse_json(&args.value)?))
}

fn with_count(args: &WithCount) -> Result<(Value, Value)> {
    Ok((parse_json(&args.seq)?, parse_json(&args.count)?))
}

fn parse_json(text: &str) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("invalid JSON input: {}", text))?;
    Ok(Value::from(json))
}

fn render(value: &Value) -> Result<String> {
    serde_json::to_string(value).context("failed to render result as JSON")
}
