use rust_decimal::Decimal;
use serde::Deserialize;
use time::Date;

time::serde::format_description!(sale_date_format, Date, "[year]-[month]-[day]");

/// Request body for creating or replacing a sale. Updates are full replaces:
/// an omitted description is cleared, not preserved.
#[derive(Debug, Deserialize)]
pub struct SalePayload {
    pub client_id: Option<i32>,
    pub amount: Option<Decimal>,
    #[serde(with = "sale_date_format::option", default)]
    pub sale_date: Option<Date>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn deserializes_calendar_date_and_decimal_amount() {
        let payload: SalePayload = serde_json::from_str(
            r#"{"client_id": 1, "amount": 150.50, "sale_date": "2024-01-15"}"#,
        )
        .unwrap();
        assert_eq!(payload.client_id, Some(1));
        assert_eq!(payload.amount, Some(Decimal::new(15050, 2)));
        assert_eq!(payload.sale_date, Some(date!(2024 - 01 - 15)));
        assert!(payload.description.is_none());
    }

    #[test]
    fn accepts_string_amounts() {
        let payload: SalePayload = serde_json::from_str(
            r#"{"client_id": 1, "amount": "99.90", "sale_date": "2024-06-30"}"#,
        )
        .unwrap();
        assert_eq!(payload.amount, Some(Decimal::new(9990, 2)));
    }

    #[test]
    fn rejects_invalid_calendar_dates() {
        let result = serde_json::from_str::<SalePayload>(
            r#"{"client_id": 1, "amount": 10, "sale_date": "2024-13-45"}"#,
        );
        assert!(result.is_err());
    }
}
