use anyhow::Result;
use clap::{Parser, Subcommand};
use railgraph::{layout_graph, Commit, ConnectionKind, GraphLayout, HistoryWalker};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitrail")]
#[command(about = "Commit graph layout for git repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the commit graph layout
    Graph {
        /// Path to the repository
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Number of commits to lay out
        #[arg(short, long, default_value = "100")]
        count: usize,
        /// Emit the layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recent commits
    Log {
        /// Path to the repository
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Number of commits to show
        #[arg(short, long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Graph { path, count, json } => {
            let walker = HistoryWalker::new(path.to_str())?;
            let commits = walker.walk(Some(count))?;
            let layout = layout_graph(&commits);

            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print_graph(&commits, &layout);
            }
        }
        Commands::Log { path, count } => {
            let walker = HistoryWalker::new(path.to_str())?;
            let commits = walker.walk(Some(count))?;

            for commit in &commits {
                let head_mark = if commit.is_head { "*" } else { " " };
                println!(
                    "{} {} {} {}{} - {}",
                    head_mark,
                    commit.short_id,
                    commit.timestamp.format("%Y-%m-%d"),
                    commit.author,
                    format_refs(commit),
                    commit.message
                );
            }
        }
    }

    Ok(())
}

fn print_graph(commits: &[Commit], layout: &GraphLayout) {
    println!(
        "{} commits on {} rails",
        layout.nodes.len(),
        layout.rails.len()
    );

    for (node, commit) in layout.nodes.iter().zip(commits) {
        let connections: Vec<String> = node
            .parent_connections
            .iter()
            .map(|connection| {
                let kind = match connection.kind {
                    ConnectionKind::Straight => "straight",
                    ConnectionKind::MergeLeft => "left",
                    ConnectionKind::MergeRight => "right",
                };
                format!("{}:{}", kind, connection.parent_column)
            })
            .collect();

        println!(
            "row {:>4}  col {:>2}  {}{}  {}  [{}]",
            node.row,
            node.column,
            commit.short_id,
            format_refs(commit),
            commit.message,
            connections.join(" ")
        );
    }
}

fn format_refs(commit: &Commit) -> String {
    if commit.refs.is_empty() {
        String::new()
    } else {
        format!(" ({})", commit.refs.join(", "))
    }
}
