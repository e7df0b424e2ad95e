//! Migration v2: created_at backfill for rows written before the column existed

pub(super) const BACKFILL_SQL: &str = "
UPDATE blogs SET created_at = strftime('%Y-%m-%dT%H:%M:%S+00:00', 'now') WHERE created_at IS NULL;
UPDATE posts SET created_at = strftime('%Y-%m-%dT%H:%M:%S+00:00', 'now') WHERE created_at IS NULL;
";
