//! Builds a self-balancing tree, then inserts, deletes and searches keys, drawing the tree as it
//! changes and finishing with every traversal order.

use std::error::Error;

use balanced_bst::print::{self, KeyWidth, PrintOptions};
use balanced_bst::traversal::{self, Order, Strategy};
use balanced_bst::{avl, red_black, Key, NodeHandle, SearchTree};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Engine {
    Avl,
    RedBlack,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Width {
    Two,
    Three,
    Four,
}

impl From<Width> for KeyWidth {
    fn from(width: Width) -> Self {
        match width {
            Width::Two => KeyWidth::Two,
            Width::Three => KeyWidth::Three,
            Width::Four => KeyWidth::Four,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(about = "Demonstrates the AVL and Red-Black trees")]
struct Args {
    /// Which tree to build.
    #[arg(short, long, value_enum, default_value_t = Engine::RedBlack)]
    engine: Engine,

    /// Keys to insert, in order.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true,
          default_values_t = [20, 7, 9, 2, 40, 22, 70, 70, 25])]
    insert: Vec<Key>,

    /// Keys to delete after inserting, in order.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true,
          default_values_t = [20, 40, 2, 7])]
    delete: Vec<Key>,

    /// Keys to look up at the end.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true,
          default_values_t = [70, 44])]
    search: Vec<Key>,

    /// Columns reserved for each key when drawing.
    #[arg(long, value_enum, default_value_t = Width::Two)]
    key_width: Width,

    /// Draw red nodes without ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    info!("building a {:?} tree", args.engine);
    match args.engine {
        Engine::Avl => run(avl::Tree::new(), &args),
        Engine::RedBlack => run(red_black::Tree::new(), &args),
    }
}

fn run<T: SearchTree>(mut tree: T, args: &Args) -> Result<(), Box<dyn Error>> {
    let options = PrintOptions {
        key_width: args.key_width.into(),
        colors: !args.no_color,
        ..PrintOptions::default()
    };

    for &key in &args.insert {
        println!("Inserting key: {key}");
        if let Err(e) = tree.insert(key).into_result() {
            println!("{e}");
        }
    }
    println!("Binary tree after insertions:");
    print::print(tree.root(), &options)?;

    for &key in &args.delete {
        println!("Delete node with key: {key}");
        if let Err(e) = tree.delete(key).into_result() {
            println!("{e}");
        }
        print::print(tree.root(), &options)?;
    }

    for &key in &args.search {
        println!("Search for a node with key: {key}");
        println!("Is found: {}", tree.contains(key));
    }

    for order in Order::ALL {
        let strategy = match order {
            Order::PreOrder => Strategy::Iterative,
            _ => Strategy::Recursive,
        };
        let mut keys = Vec::new();
        traversal::traverse(tree.root(), order, strategy, |n| keys.push(n.key().to_string()));
        println!("\n{order} traversal:\n{}", keys.join(" "));
    }

    Ok(())
}
