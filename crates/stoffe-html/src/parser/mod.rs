//! Tree construction for markup fragments.

/// Template-content tree builder.
pub mod fragment;

pub use fragment::{
    FragmentParser, ParseIssue, parse_fragment, parse_fragment_with_issues, tree_to_string,
    write_tree,
};
