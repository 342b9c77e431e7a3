//! The card record as stored in `<schema>.card_data` and exchanged as JSON.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of card data. The id is assigned by the caller on create; every
/// other column is nullable, so absence (SQL NULL) maps to `None` rather than
/// a zero/false default. `credit_limit` is fixed-point and must never pass
/// through a binary float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: i32,
    pub client_id: Option<i32>,
    pub card_brand: Option<String>,
    pub card_type: Option<String>,
    // Stored as plain text, matching the upstream system. Known
    // sensitive-data gap; kept deliberately (see DESIGN.md).
    pub card_number: Option<String>,
    pub expires: Option<NaiveDate>,
    pub cvv: Option<String>,
    pub has_chip: Option<bool>,
    pub num_cards_issued: Option<i32>,
    pub credit_limit: Option<BigDecimal>,
    pub acct_open_date: Option<NaiveDate>,
    pub year_pin_last_changed: Option<i32>,
    pub card_on_dark_web: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn serializes_camel_case_with_nulls_for_unset_fields() {
        let record = CardRecord {
            id: 1,
            client_id: Some(200),
            card_brand: None,
            card_type: Some("CREDIT".into()),
            card_number: None,
            expires: None,
            cvv: None,
            has_chip: None,
            num_cards_issued: None,
            credit_limit: None,
            acct_open_date: None,
            year_pin_last_changed: None,
            card_on_dark_web: None,
        };
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["clientId"], 200);
        assert_eq!(v["cardType"], "CREDIT");
        assert!(v["hasChip"].is_null());
        assert!(v["cardOnDarkWeb"].is_null());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let record: CardRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.client_id, None);
        assert_eq!(record.has_chip, None);
        assert_eq!(record.credit_limit, None);
    }

    #[test]
    fn round_trips_decimal_and_dates_exactly() {
        let record: CardRecord = serde_json::from_str(
            r#"{
                "id": 10,
                "expires": "2027-12-31",
                "acctOpenDate": "2020-01-01",
                "creditLimit": "1000.00"
            }"#,
        )
        .unwrap();
        assert_eq!(record.expires, NaiveDate::from_ymd_opt(2027, 12, 31));
        assert_eq!(record.acct_open_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(
            record.credit_limit,
            Some(BigDecimal::from_str("1000.00").unwrap())
        );

        let back: CardRecord =
            serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
