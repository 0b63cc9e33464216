use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::{PagerWriter, UserError};
use is_terminal::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A tiny local version-control system",
    long_about = "A tiny local version-control system: a content-addressable \
    object store layered with an immutable commit history, a staging index, \
    branches and a three-way merge engine.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository in the current directory"
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        path: String,
    },
    #[command(name = "commit", about = "Create a new commit from the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "rm", about = "Stage a file for removal")]
    Rm {
        #[arg(index = 1)]
        path: String,
    },
    #[command(name = "log", about = "Show the active branch's commit history")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged and removed files")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch to another branch",
        long_about = "Three forms: `checkout <branch>` switches branches, \
        `checkout -- <path>` restores a file from head, and \
        `checkout <commit-id> -- <path>` restores a file from a commit \
        (the id may be an unambiguous prefix)."
    )]
    Checkout {
        #[arg(value_name = "TARGET", help = "Branch name or commit id")]
        target: Option<String>,
        #[arg(last = true, value_name = "PATH", help = "File path, after --")]
        path: Vec<String>,
    },
    #[command(name = "branch", about = "Create a new branch at the current head")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1, value_name = "COMMIT_ID")]
        commit_id: String,
    },
    #[command(name = "merge", about = "Merge a branch into the active branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match error.downcast_ref::<UserError>() {
            // modeled outcome: print the message, the command completed
            Some(user_error) => {
                println!("{user_error}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("fatal: {error:?}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let pwd = pwd.to_string_lossy();

    match &cli.command {
        Commands::Init => Repository::init(&pwd),
        Commands::Add { path } => open(&pwd)?.add(path),
        Commands::Commit { message } => open(&pwd)?.commit(message.as_deref().unwrap_or("")),
        Commands::Rm { path } => open(&pwd)?.rm(path),
        Commands::Log => with_pager(|writer| Repository::open(&pwd, writer)?.log()),
        Commands::GlobalLog => with_pager(|writer| Repository::open(&pwd, writer)?.global_log()),
        Commands::Find { message } => open(&pwd)?.find(message),
        Commands::Status => open(&pwd)?.status(),
        Commands::Checkout { target, path } => {
            let mut repository = open(&pwd)?;
            match (target.as_deref(), path.as_slice()) {
                (Some(branch), []) => repository.checkout_branch(branch),
                (None, [file]) => repository.checkout_file_from_head(file),
                (Some(commit_id), [file]) => repository.checkout_file(commit_id, file),
                _ => anyhow::bail!(UserError::IncorrectOperands),
            }
        }
        Commands::Branch { name } => open(&pwd)?.branch(name),
        Commands::RmBranch { name } => open(&pwd)?.rm_branch(name),
        Commands::Reset { commit_id } => open(&pwd)?.reset(commit_id),
        Commands::Merge { branch } => open(&pwd)?.merge(branch).map(|_| ()),
    }
}

fn open(path: &str) -> Result<Repository> {
    Repository::open(path, Box::new(std::io::stdout()))
}

/// Page long output on a terminal, fall through to stdout otherwise
fn with_pager<F>(command: F) -> Result<()>
where
    F: FnOnce(Box<dyn std::io::Write>) -> Result<()>,
{
    if std::io::stdout().is_terminal() {
        let pager = minus::Pager::new();
        command(Box::new(PagerWriter::new(pager.clone())))?;
        minus::page_all(pager)?;
        Ok(())
    } else {
        command(Box::new(std::io::stdout()))
    }
}
