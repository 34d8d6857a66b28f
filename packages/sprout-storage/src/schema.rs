pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			let included = match path.trim() {
				"tables/001_plant_records.sql" =>
					include_str!("../../../sql/tables/001_plant_records.sql"),
				"tables/002_notification_triggers.sql" =>
					include_str!("../../../sql/tables/002_notification_triggers.sql"),
				"tables/003_settings.sql" => include_str!("../../../sql/tables/003_settings.sql"),
				_ => line,
			};

			out.push_str(&strip_comments(included));
		} else {
			out.push_str(&strip_comments(line));
		}

		out.push('\n');
	}

	out
}

// Statements are split on `;` and sent one by one, so comment-only chunks must not survive.
fn strip_comments(sql: &str) -> String {
	sql.lines()
		.filter(|line| !line.trim_start().starts_with("--"))
		.collect::<Vec<_>>()
		.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn includes_every_table() {
		let sql = render_schema();

		assert!(sql.contains("CREATE TABLE IF NOT EXISTS plant_records"));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS notification_triggers"));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS settings"));
		assert!(!sql.contains("\\ir"));
		assert!(!sql.contains("--"));
	}
}
