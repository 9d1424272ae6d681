use railgraph::{layout_graph, HistoryWalker};

fn main() {
    println!("gitrail Layout Demo");
    println!("===================\n");

    // Load repository
    let walker = match HistoryWalker::new(None) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error loading repository: {}", e);
            return;
        }
    };

    // Walk history
    let commits = match walker.walk(Some(20)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error walking history: {}", e);
            return;
        }
    };

    let merges = commits.iter().filter(|c| c.is_merge()).count();
    let roots = commits.iter().filter(|c| c.is_root()).count();

    println!("Repository statistics:");
    println!("  Total commits: {}", commits.len());
    println!("  Merge commits: {}", merges);
    println!("  Root commits: {}", roots);
    println!();

    // Lay out
    let layout = layout_graph(&commits);

    println!("Commit graph ({} rails):", layout.rails.len());
    for (node, commit) in layout.nodes.iter().zip(&commits) {
        println!(
            "  row {:>3}  col {:>2}  {}  {}",
            node.row, node.column, commit.short_id, commit.message
        );
    }
}
