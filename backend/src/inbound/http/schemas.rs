//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain type
//! names.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::LicenceType`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::LicenceType)]
#[serde(rename_all = "snake_case")]
pub enum LicenceTypeSchema {
    FirearmCertificate,
    ShotgunCertificate,
    Coterminous,
    VisitorPermit,
}

/// OpenAPI schema for [`crate::domain::TransferStatus`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::TransferStatus)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatusSchema {
    Held,
    PendingTransfer,
    Transferred,
    Surrendered,
}

/// OpenAPI schema for [`crate::domain::LicenceHolder`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::LicenceHolder)]
pub struct LicenceHolderSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    holder_id: uuid::Uuid,
    #[schema(example = "FAC/12/0042")]
    licence_number_raw: String,
    first_name: String,
    last_name: String,
    #[schema(example = "Anna Smith")]
    full_name: String,
    #[schema(value_type = String, format = Date, example = "1984-06-02")]
    dob: String,
    address_line: String,
    town: String,
    postcode: String,
    phone: Option<String>,
    email: Option<String>,
    licence_type: LicenceTypeSchema,
    #[schema(value_type = String, format = Date)]
    valid_from: String,
    #[schema(value_type = String, format = Date)]
    valid_to: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::Firearm`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::Firearm)]
pub struct FirearmSchema {
    firearm_id: uuid::Uuid,
    holder_id: uuid::Uuid,
    serial_number_raw: String,
    #[schema(example = "Beretta")]
    make: String,
    #[schema(example = "92")]
    model: String,
    #[schema(example = "9mm")]
    calibre: String,
    #[serde(rename = "type")]
    #[schema(example = "pistol")]
    firearm_type: String,
    action: String,
    barrel_length_mm: Option<f64>,
    chamber_size_mm: Option<f64>,
    manufacture_year: Option<i32>,
    #[schema(value_type = Option<String>, format = Date)]
    proof_date: Option<String>,
    condition: String,
    notes: Option<String>,
    transfer_status: TransferStatusSchema,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_properties<S: PartialSchema>() -> Vec<String> {
        match S::schema() {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            other => panic!(
                "expected object schema, got {}",
                serde_json::to_string(&other).unwrap_or_default()
            ),
        }
    }

    #[test]
    fn firearm_schema_uses_type_as_the_wire_name() {
        let props = object_properties::<FirearmSchema>();
        assert!(props.iter().any(|p| p == "type"));
        assert!(!props.iter().any(|p| p == "firearm_type"));
    }

    #[test]
    fn optional_holder_fields_are_not_required() {
        let RefOr::T(Schema::Object(object)) = LicenceHolderSchema::schema() else {
            panic!("expected object schema");
        };
        assert!(object.required.iter().any(|f| f == "full_name"));
        assert!(!object.required.iter().any(|f| f == "phone"));
        assert!(!object.required.iter().any(|f| f == "email"));
    }
}
