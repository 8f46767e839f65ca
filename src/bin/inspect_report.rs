use std::error::Error;
use std::path::Path;

use ferrel::report::{classify_line, read_report, LineKind};

/// Print how each line of a report file is classified by the parser.
///
/// Debugging aid for new report layouts: shows which lines open sections
/// and which lines would be treated as data rows.
fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: inspect_report <report-file>")?;
    let path = Path::new(&path);

    println!("Inspecting report file: {}", path.display());

    let text = read_report(path)?;

    let mut in_data_section = false;
    let mut counts = [0usize; 5];

    println!("\n=== LINE CLASSIFICATION ===");
    for (number, line) in text.lines().enumerate() {
        let kind = classify_line(line, in_data_section);
        match kind {
            LineKind::TestCase => {
                in_data_section = false;
                counts[0] += 1;
                println!("{:5}  TEST CASE     {}", number + 1, line.trim());
            }
            LineKind::ControlCase => {
                counts[1] += 1;
                println!("{:5}  CONTROL CASE  {}", number + 1, line.trim());
            }
            LineKind::ColumnHeader => {
                in_data_section = true;
                counts[2] += 1;
                println!("{:5}  HEADER        {}", number + 1, line.trim());
            }
            LineKind::Data => {
                counts[3] += 1;
            }
            LineKind::Ignored => {
                counts[4] += 1;
            }
        }
    }

    println!("\n=== SUMMARY ===");
    println!("  test case headers:    {}", counts[0]);
    println!("  control case headers: {}", counts[1]);
    println!("  column headers:       {}", counts[2]);
    println!("  candidate data rows:  {}", counts[3]);
    println!("  ignored lines:        {}", counts[4]);

    Ok(())
}
