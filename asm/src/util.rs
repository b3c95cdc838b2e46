use color_print::cformat;
use indexmap::IndexMap;

use crate::session::Session;

/// Assembly listing: one row per instruction, label rows before their address.
pub fn dump(session: &Session) -> Vec<String> {
    let mut labels: IndexMap<u32, Vec<&str>> = IndexMap::new();
    for (name, addr) in session.idents().labels() {
        labels.entry(addr).or_default().push(name);
    }
    let label_rows = |addr: u32| -> Vec<String> {
        labels
            .get(&addr)
            .map(|names| {
                names
                    .iter()
                    .map(|name| format!("{:19}| {}", "", cformat!("<g>{}:</>", name)))
                    .collect()
            })
            .unwrap_or_default()
    };

    let mut rows = vec![];
    let mut file = None;
    for (addr, line) in session.program().lines().iter().enumerate() {
        let addr = addr as u32;
        if file != Some(&line.pos.file) {
            file = Some(&line.pos.file);
            rows.push(format!(
                "{}+------[{}]{}",
                "-".repeat(19),
                line.pos.file,
                "-".repeat(45usize.saturating_sub(line.pos.file.len()))
            ));
        }
        rows.extend(label_rows(addr));
        let bin = line.inst.encode();
        rows.push(format!(
            "[{:04X}] {:02X} {:02X}     | {:>4}:   {}",
            addr,
            bin >> 8,
            bin & 0xFF,
            line.pos.line,
            line.inst.cformat()
        ));
    }
    rows.extend(label_rows(session.program().pc()));
    rows.push(format!("{}+{}", "-".repeat(19), "-".repeat(53)));
    rows
}

pub fn print_dump(session: &Session) {
    for row in dump(session) {
        println!("{}", row);
    }
}
