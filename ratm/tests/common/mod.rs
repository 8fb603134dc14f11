use std::{fs::File, io::Read};

use ratm::tree::Node;

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content: String = content.split_whitespace().collect();

    let mut res = Vec::new();
    let mut start_idx = 0;
    while start_idx < content.len() {
        // Pop two characters out
        let end_idx = start_idx + 2;
        res.push(u8::from_str_radix(&content[start_idx..end_idx], 16).unwrap());
        start_idx = end_idx;
    }

    res
}

/// Every node named `name` in `tree`, in depth-first order.
#[allow(dead_code)]
pub fn find_all<'a>(tree: &'a [Node], name: &str) -> Vec<&'a Node> {
    let mut out = Vec::new();
    for node in tree.iter() {
        node.find_all(name, &mut out);
    }
    out
}
