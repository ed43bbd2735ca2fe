use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use bcfind_code::InstructionSequence;
use bcfind_finder::{Finder, Pattern};

#[derive(Parser)]
#[command(
    name = "bcfind",
    about = "JVM bytecode disassembler and instruction pattern finder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Disassemble a raw code stream to a human-readable listing
    Disasm {
        /// Path to the raw bytecode file
        input: PathBuf,
    },
    /// Search a raw code stream for an instruction pattern
    Find {
        /// Path to the raw bytecode file
        input: PathBuf,
        /// Pattern text: mnemonics, category aliases, regex metacharacters
        #[arg(short, long)]
        pattern: String,
        /// Sequence position to start searching from
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Emit matches as JSON records, one per line
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Disasm { input } => cmd_disasm(&input),
        Commands::Find {
            input,
            pattern,
            from,
            json,
        } => cmd_find(&input, &pattern, from, json),
    }
}

fn load_sequence(path: &PathBuf) -> InstructionSequence {
    let code = match fs::read(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    match InstructionSequence::decode(&code) {
        Ok(seq) => {
            log::info!("decoded {} instructions from {}", seq.len(), path.display());
            seq
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_disasm(path: &PathBuf) {
    let seq = load_sequence(path);
    for insn in &seq {
        println!("{:#06x}  {insn}", insn.offset);
    }
}

#[derive(serde::Serialize)]
struct MatchRecord {
    start: usize,
    end: usize,
    byte_offsets: Vec<u32>,
    instructions: Vec<String>,
}

fn cmd_find(path: &PathBuf, pattern_text: &str, from: usize, json: bool) {
    let seq = load_sequence(path);
    let pattern = match Pattern::compile(pattern_text) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("token pattern: {}", pattern.token_pattern());

    let finder = Finder::new(&seq);
    let mut total = 0usize;
    for m in finder.search_from(&pattern, from) {
        total += 1;
        if json {
            let record = MatchRecord {
                start: m.start(),
                end: m.end(),
                byte_offsets: m.instructions().iter().map(|i| i.offset).collect(),
                instructions: m.instructions().iter().map(|i| i.to_string()).collect(),
            };
            match serde_json::to_string(&record) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        } else {
            println!("match at positions {}..{}", m.start(), m.end());
            for insn in m.instructions() {
                println!("    {:#06x}  {insn}", insn.offset);
            }
        }
    }
    if !json {
        println!("{total} match(es)");
    }
}
