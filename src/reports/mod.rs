use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use freqcrack::analyzer::{CipherAnalysis, LetterFrequencies};
use freqcrack::decoder::Substitution;
use freqcrack::reference::ReferenceTable;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Control characters would break the grid, so show them escaped.
fn show(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => "␠".to_string(),
        _ => c.to_string(),
    }
}

pub fn print_letter_frequencies(freqs: &LetterFrequencies) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("%").fg(Color::Cyan),
    ]);
    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, row) in freqs.rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank),
            Cell::new(show(row.letter)).add_attribute(Attribute::Bold),
            Cell::new(row.count),
            Cell::new(format!("{:.2}", row.percent)).fg(Color::Cyan),
        ]);
    }

    println!("\n📊 Ciphertext: {} letters counted", freqs.total);
    println!("{}", table);
}

pub fn print_cipher_ranking(cipher: &CipherAnalysis) {
    match cipher.frequencies {
        Some(ref freqs) => print_letter_frequencies(freqs),
        None => {
            println!("\n📂 Cipher ranking (from cache): {}", cipher.ranking);
        }
    }
}

pub fn print_reference_ranking(reference: &ReferenceTable) {
    println!(
        "\n📚 Reference ranking ({}): {}",
        reference.reduction, reference.ranking
    );
}

pub fn print_correspondence(pairs: &[(char, Option<char>)]) {
    let mut table = new_table();
    let mut cipher_row = vec![Cell::new("Cipher").add_attribute(Attribute::Bold)];
    let mut plain_row = vec![Cell::new("Plain").add_attribute(Attribute::Bold)];

    for &(c, p) in pairs {
        cipher_row.push(Cell::new(show(c)));
        plain_row.push(match p {
            Some(p) => Cell::new(show(p)).fg(Color::Green),
            None => Cell::new("?").fg(Color::Red),
        });
    }
    table.add_row(cipher_row);
    table.add_row(plain_row);

    println!("\n🔑 Rank correspondence");
    println!("{}", table);
}

pub fn print_substitution(sub: &Substitution) {
    println!(
        "{} -> #{} -> {}",
        show(sub.cipher),
        sub.index,
        show(sub.plain)
    );
}
