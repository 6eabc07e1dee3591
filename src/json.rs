use serde_json::Value;

/// Lookups into JSON objects that report absence instead of failing.
/// Any value that is not an object simply has no children
pub trait JsonExt {
	/// Gets a child that is itself an object
	fn try_as_object(&self, key: &str) -> Option<&Value>;

	/// Gets a child that is an integer
	fn try_as_int(&self, key: &str) -> Option<i64>;
}

impl JsonExt for Value {
	fn try_as_object(&self, key: &str) -> Option<&Value> {
		self.get(key).filter(|x| x.is_object())
	}

	fn try_as_int(&self, key: &str) -> Option<i64> {
		self.get(key)?.as_i64()
	}
}

/// Appends an object key to a JSON pointer, escaping it as RFC 6901 requires
pub fn join_pointer(base: &str, key: &str) -> String {
	let key = key.replace('~', "~0").replace('/', "~1");
	format!("{base}/{key}")
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_nested_access() {
		let meta = json!({"pack": {"pack_format": 7, "description": "test"}});
		let pack = meta.try_as_object("pack").unwrap();
		assert_eq!(pack.try_as_int("pack_format"), Some(7));
		assert_eq!(pack.try_as_int("description"), None);
		assert!(meta.try_as_object("missing").is_none());
	}

	#[test]
	fn test_non_object_parent() {
		let value = json!([1, 2, 3]);
		assert!(value.try_as_object("pack").is_none());
		assert_eq!(Value::Null.try_as_int("pack_format"), None);
		assert_eq!(json!({"pack": "minecraft:x"}).try_as_object("pack"), None);
	}

	#[test]
	fn test_float_is_not_int() {
		assert_eq!(json!({"min_y": 0.5}).try_as_int("min_y"), None);
	}

	#[test]
	fn test_pointer_escaping() {
		assert_eq!(join_pointer("", "type"), "/type");
		assert_eq!(join_pointer("/a", "b/c~d"), "/a/b~1c~0d");
	}
}
