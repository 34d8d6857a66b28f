use time::macros::datetime;

use sprout_domain::{ALL_ENVIRONMENTS, CatalogPlant, PlantRecord, RepeatEvery};

fn aloe() -> CatalogPlant {
	serde_json::from_value(serde_json::json!({
		"id": 1,
		"name": "Aloe Vera",
		"about": "Grows well in dry climates.",
		"water_tips": "Water with care, do not overdo it.",
		"photo": "https://storage.example/aloe.svg",
		"environments": ["living_room", "kitchen", "kitchen"],
		"frequency": { "times": 2, "repeat_every": "week" }
	}))
	.expect("Catalog plant must decode.")
}

#[test]
fn catalog_plant_decodes_wire_names() {
	let plant = aloe();

	assert_eq!(plant.frequency.repeat_every, RepeatEvery::Week);
	assert_eq!(plant.frequency.times, 2);
	assert_eq!(plant.photo, "https://storage.example/aloe.svg");
}

#[test]
fn environment_filter_honors_all() {
	let plant = aloe();

	assert!(plant.grows_in(ALL_ENVIRONMENTS));
	assert!(plant.grows_in("kitchen"));
	assert!(!plant.grows_in("bathroom"));
}

#[test]
fn record_copies_catalog_fields_and_dedups_environments() {
	let at = datetime!(2026-10-16 08:30 -3);
	let record = aloe().into_record(at);

	assert_eq!(record.id, 1);
	assert_eq!(record.photo_uri, "https://storage.example/aloe.svg");
	assert_eq!(record.environments.len(), 2);
	assert_eq!(record.date_time_notification, at);
	assert_eq!(record.hour(), "08:30");
}

#[test]
fn record_json_keeps_offset() {
	let record = aloe().into_record(datetime!(2026-10-16 08:30 -3));
	let json = serde_json::to_value(&record).expect("Record must encode.");

	assert_eq!(json["date_time_notification"], "2026-10-16T08:30:00-03:00");

	let decoded: PlantRecord = serde_json::from_value(json).expect("Record must decode.");

	assert_eq!(decoded, record);
	assert_eq!(decoded.date_time_notification.offset(), record.date_time_notification.offset());
}
