//! CSV utilities for the audit export. Uses the `csv` crate for safe serialization.

use crate::domain::Expense;

/// Convert expenses to a CSV string.
///
/// Format: `Id;Date;Description;Amount` (semicolon-delimited). Newlines in
/// descriptions are collapsed to spaces so each expense stays on one line.
pub fn expenses_to_csv<'a, I>(expenses: I) -> Result<String, csv::Error>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(["Id", "Date", "Description", "Amount"])?;

    for e in expenses {
        let clean_description = e.description.replace('\n', " ").replace('\r', "");
        let amount = e.amount.to_string();
        wtr.write_record([
            e.id.as_str(),
            e.date_added.as_str(),
            clean_description.as_str(),
            amount.as_str(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, description: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date_added: "2023-10-05".to_string(),
            description: description.to_string(),
            amount,
        }
    }

    #[test]
    fn test_expenses_to_csv_basic() {
        let expenses = vec![expense("e1", "Water bill", 1200.0), expense("e2", "Diesel", 4500.5)];
        let csv = expenses_to_csv(&expenses).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Id;Date;Description;Amount");
        assert_eq!(lines[1], "e1;2023-10-05;Water bill;1200");
        assert_eq!(lines[2], "e2;2023-10-05;Diesel;4500.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_expenses_to_csv_special_chars() {
        let expenses = vec![expense("e1", "Bulbs; \"LED\" x4\nfor corridor", 850.0)];
        let csv = expenses_to_csv(&expenses).unwrap();
        // header + 1 data row; delimiter and quotes are quoted by the writer
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"Bulbs; \"\"LED\"\" x4 for corridor\""));
    }

    #[test]
    fn test_expenses_to_csv_empty_has_header() {
        let csv = expenses_to_csv(&Vec::<Expense>::new()).unwrap();
        assert_eq!(csv, "Id;Date;Description;Amount\n");
    }
}
