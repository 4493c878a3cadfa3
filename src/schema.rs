// Diesel table definitions for the lifeline catalogs.
// Kept in sync by hand with the DDL in repository/provision.rs.

diesel::table! {
    emergencies (id) {
        id -> Integer,
        name -> Text,
        steps -> Text,
    }
}

diesel::table! {
    places (id) {
        id -> Integer,
        city -> Text,
        name -> Text,
        category -> Text,
        address -> Text,
        phone -> Text,
        lat -> Double,
        lon -> Double,
    }
}

diesel::allow_tables_to_appear_in_same_query!(emergencies, places);
