use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use flispgen_codegen::{Mode, emit_match, normalize, shorthand_content};
use flispgen_table::{Operation, builtin};

#[derive(Parser)]
#[command(name = "flispgen", about = "FLISP opcode dispatch-table generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the opcode match block
    Gen {
        /// YAML operation table (default: built-in FLISP table)
        #[arg(short, long)]
        table: Option<PathBuf>,
        /// Emit canonical Instruction/Addressing pairs instead of the raw
        /// shorthand column
        #[arg(short, long)]
        normalized: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List table records with their normalized forms
    List {
        /// YAML operation table (default: built-in FLISP table)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
    /// Verify that every record's shorthand is recognized
    Check {
        /// YAML operation table (default: built-in FLISP table)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            table,
            normalized,
            output,
        } => cmd_gen(table.as_deref(), normalized, output.as_deref()),
        Commands::List { table } => cmd_list(table.as_deref()),
        Commands::Check { table } => cmd_check(table.as_deref()),
    }
}

fn load_table(path: Option<&Path>) -> Vec<Operation> {
    let Some(path) = path else {
        return builtin::operations();
    };
    match flispgen_table::open(path) {
        Ok(ops) => ops,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_gen(table: Option<&Path>, normalized: bool, output: Option<&Path>) {
    let ops = load_table(table);
    let mode = if normalized {
        Mode::Normalized
    } else {
        Mode::Passthrough
    };

    let text = match emit_match(&ops, mode) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => print!("{text}"),
    }
}

fn cmd_list(table: Option<&Path>) {
    let ops = load_table(table);
    for op in &ops {
        let content = shorthand_content(&op.short_hand);
        match normalize(op) {
            Ok(norm) if norm.addressing.is_empty() => {
                println!("0x{}  {:<5} {:<5}  ->  {}", op.code, op.ty, content, norm.mnemonic);
            }
            Ok(norm) => {
                println!(
                    "0x{}  {:<5} {:<5}  ->  {}(Addressing::{})",
                    op.code, op.ty, content, norm.mnemonic, norm.addressing
                );
            }
            Err(e) => {
                eprintln!("0x{}  {:<5} {:<5}  !!  {e}", op.code, op.ty, content);
            }
        }
    }
}

fn cmd_check(table: Option<&Path>) {
    let ops = load_table(table);
    let mut failures = 0usize;
    for op in &ops {
        if let Err(e) = normalize(op) {
            eprintln!("{e}");
            failures += 1;
        }
    }
    if failures > 0 {
        eprintln!("{failures} of {} records failed to classify", ops.len());
        std::process::exit(1);
    }
    println!("{} records OK", ops.len());
}
