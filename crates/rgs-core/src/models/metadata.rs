//! Partner metadata attached to a patient.

use serde::{Deserialize, Serialize};

/// Partner product and contract the patient is enrolled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    product_id: i64,
    contract_id: i64,
}

impl MetaData {
    pub fn new(product_id: i64, contract_id: i64) -> Self {
        Self {
            product_id,
            contract_id,
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn contract_id(&self) -> i64 {
        self.contract_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let metadata = MetaData::new(13, 10293);
        let json = serde_json::to_value(metadata).unwrap();
        assert_eq!(json, serde_json::json!({ "productId": 13, "contractId": 10293 }));
    }

    #[test]
    fn test_decode_requires_both_ids() {
        let decoded: MetaData =
            serde_json::from_str(r#"{"productId": 13, "contractId": 10293}"#).unwrap();
        assert_eq!(decoded.product_id(), 13);
        assert_eq!(decoded.contract_id(), 10293);

        assert!(serde_json::from_str::<MetaData>(r#"{"productId": 13}"#).is_err());
    }
}
