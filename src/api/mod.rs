pub mod delivery_notes;
