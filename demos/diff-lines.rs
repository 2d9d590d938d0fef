use std::{env, fs, process};

use edit_script::{Item, difference};

/// Prints the line diff of two files, prefixing removed lines with `-`,
/// inserted ones with `+`, and unchanged ones with a space.
///
/// Run it with:
/// `cargo run --example diff-lines old.txt new.txt`
///
/// Set `RUST_LOG=edit_script=trace` to see how the solver splits the files.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: diff-lines <old> <new>");
        process::exit(1);
    }

    let old_content = read(&args[1]);
    let new_content = read(&args[2]);

    let old_lines: Vec<&str> = old_content.lines().collect();
    let new_lines: Vec<&str> = new_content.lines().collect();

    let difference = difference(&old_lines, &new_lines);

    let mut old_index = 0;
    for item in &difference {
        while old_index < item.old_index() {
            println!(" {}", old_lines[old_index]);
            old_index += 1;
        }

        match *item {
            Item::Remove { old_index: removed } => {
                println!("-{}", old_lines[removed]);
                old_index = removed + 1;
            }
            Item::Insert { new_index, .. } => println!("+{}", new_lines[new_index]),
        }
    }

    for line in &old_lines[old_index..] {
        println!(" {line}");
    }

    if !difference.is_empty() {
        process::exit(1);
    }
}

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(2);
    })
}
