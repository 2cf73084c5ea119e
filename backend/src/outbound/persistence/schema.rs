//! Diesel table definitions for the registry schema.
//!
//! The schema is owned outside this service; these definitions must match it.
//! `diesel print-schema` against a live database regenerates the column list.

diesel::table! {
    /// Licensed individuals.
    licence_holders (holder_id) {
        holder_id -> Uuid,
        licence_number_raw -> Text,
        first_name -> Text,
        last_name -> Text,
        /// Denormalised display name; the search ordering key.
        full_name -> Text,
        dob -> Date,
        address_line -> Text,
        town -> Text,
        postcode -> Text,
        phone -> Nullable<Text>,
        email -> Nullable<Text>,
        /// One of the `LicenceType` wire values.
        licence_type -> Text,
        valid_from -> Date,
        valid_to -> Date,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Registered firearms, each owned by one holder.
    firearms (firearm_id) {
        firearm_id -> Uuid,
        holder_id -> Uuid,
        serial_number_raw -> Text,
        make -> Text,
        model -> Text,
        calibre -> Text,
        #[sql_name = "type"]
        firearm_type -> Text,
        action -> Text,
        barrel_length_mm -> Nullable<Float8>,
        chamber_size_mm -> Nullable<Float8>,
        manufacture_year -> Nullable<Int4>,
        proof_date -> Nullable<Date>,
        condition -> Text,
        notes -> Nullable<Text>,
        /// One of the `TransferStatus` wire values.
        transfer_status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(firearms -> licence_holders (holder_id));

diesel::allow_tables_to_appear_in_same_query!(firearms, licence_holders);
