//! The tree command

use std::io::{self, Write};

use colored::Colorize;
use solgen_core::{Context, FileDescriptor, TreeNode, TreeVisitor, source_tree};

use crate::error::Result;

/// Prints nodes as an indented outline, keeping the first write error.
struct Printer<'w, W> {
    out: &'w mut W,
    result: io::Result<()>,
}

impl<W: Write> Printer<'_, W> {
    fn line(&mut self, depth: usize, text: &str) {
        if self.result.is_ok() {
            self.result = writeln!(self.out, "{}{}", "  ".repeat(depth + 1), text);
        }
    }
}

impl<W: Write> TreeVisitor<FileDescriptor> for Printer<'_, W> {
    fn on_branch(&mut self, node: &TreeNode<FileDescriptor>, depth: usize) {
        let label = format!("{}/", node.name()).blue().bold().to_string();
        self.line(depth, &label);
    }

    fn on_leaf(&mut self, node: &TreeNode<FileDescriptor>, depth: usize) {
        self.line(depth, node.name());
    }
}

/// Run the tree command
pub fn run_tree(ctx: &Context<'_>, name: &str, out: &mut impl Write) -> Result<()> {
    let project = ctx.registry().require_project(name)?;
    let tree = source_tree(project.project());

    writeln!(out, "{}", tree.root().name().green().bold())?;
    let mut printer = Printer {
        out,
        result: Ok(()),
    };
    tree.traverse(&mut printer);
    printer.result?;
    Ok(())
}
