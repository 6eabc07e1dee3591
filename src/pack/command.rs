/// What a single line of a function contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
	Command,
	Comment,
	Blank,
}

/// A single command. For lines that are not commands, the key is None
/// and there are no arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	/// Line number in the function file, starting at 1
	pub line: usize,
	/// Text of the command with surrounding whitespace removed
	pub raw: String,
	pub kind: CommandKind,
	/// First token of the command
	pub key: Option<String>,
	/// Every token after the key
	pub args: Vec<String>,
	/// Command after `run` when this is an execute
	pub run: Option<Box<Command>>,
}

impl Command {
	pub fn parse(line: usize, text: &str) -> Self {
		let raw = text.trim();
		let kind = if raw.is_empty() {
			CommandKind::Blank
		} else if raw.starts_with('#') {
			CommandKind::Comment
		} else {
			CommandKind::Command
		};

		let mut out = Self {
			line,
			raw: raw.to_string(),
			kind,
			key: None,
			args: Vec::new(),
			run: None,
		};
		if kind != CommandKind::Command {
			return out;
		}

		let tokens = tokenize(raw);
		let mut tokens_iter = tokens.iter().map(|(_, tok)| tok.to_string());
		out.key = tokens_iter.next();
		out.args = tokens_iter.collect();

		if out.key.as_deref() == Some("execute") {
			if let Some((start, _)) = find_run(&tokens).and_then(|pos| tokens.get(pos + 1)) {
				out.run = Some(Box::new(Self::parse(line, &raw[*start..])));
			}
		}

		out
	}

	pub fn is_command(&self) -> bool {
		self.kind == CommandKind::Command
	}

	/// The text of this command without the command it runs
	pub fn own_text(&self) -> &str {
		match &self.run {
			Some(run) => self.raw[..self.raw.len() - run.raw.len()].trim_end(),
			None => &self.raw,
		}
	}

	/// This command followed by every command it runs
	pub fn chain(&self) -> impl Iterator<Item = &Command> {
		std::iter::successors(Some(self), |cmd| cmd.run.as_deref())
	}
}

/// Finds the index of the `run` keyword of an execute command. Each subcommand
/// is stepped over along with its arguments, so an argument that happens to
/// be `run` is not mistaken for the keyword
fn find_run(tokens: &[(usize, &str)]) -> Option<usize> {
	let word = |i: usize| tokens.get(i).map(|(_, tok)| *tok);

	let mut i = 1;
	while let Some(sub) = word(i) {
		let len = match sub {
			"run" => return Some(i),
			"align" | "anchored" | "as" | "at" | "in" => 2,
			// facing <x> <y> <z> or facing entity <targets> <anchor>
			"facing" => 4,
			"positioned" if word(i + 1) == Some("as") => 3,
			"positioned" => 4,
			// rotated <yaw> <pitch> or rotated as <targets>
			"rotated" => 3,
			"store" => match word(i + 2) {
				Some("block") => 9,
				Some("bossbar" | "score") => 5,
				Some("entity" | "storage") => 7,
				_ => return None,
			},
			"if" | "unless" => match word(i + 1) {
				Some("block") => 6,
				Some("blocks") => 12,
				Some("data") if word(i + 2) == Some("block") => 7,
				Some("data") => 5,
				Some("entity" | "predicate") => 3,
				Some("score") if word(i + 4) == Some("matches") => 6,
				Some("score") => 7,
				_ => return None,
			},
			// Subcommands from other versions. Fall back to the next run
			_ => {
				return tokens[i..]
					.iter()
					.position(|(_, tok)| *tok == "run")
					.map(|pos| i + pos)
			}
		};
		i += len;
	}

	None
}

/// Splits a command into tokens along with their byte offsets. Quoted strings
/// and bracketed data such as NBT compounds and selector arguments
/// stay in one token, even when they contain whitespace
pub fn tokenize(text: &str) -> Vec<(usize, &str)> {
	let mut out = Vec::new();
	let mut state = LexState::Root;
	let mut depth: u32 = 0;
	let mut start = None;

	for (i, c) in text.char_indices() {
		match state {
			LexState::Quoted(quote) => {
				if c == '\\' {
					state = LexState::Escaped(quote);
				} else if c == quote {
					state = LexState::Root;
				}
				continue;
			}
			LexState::Escaped(quote) => {
				state = LexState::Quoted(quote);
				continue;
			}
			LexState::Root => {}
		}

		if c.is_whitespace() && depth == 0 {
			if let Some(s) = start.take() {
				out.push((s, &text[s..i]));
			}
			continue;
		}

		if start.is_none() {
			start = Some(i);
		}
		match c {
			'"' => state = LexState::Quoted(c),
			// Apostrophes in plain text such as chat messages are not quotes
			'\'' if depth > 0 || start == Some(i) => state = LexState::Quoted(c),
			'{' | '[' => depth += 1,
			'}' | ']' => depth = depth.saturating_sub(1),
			_ => {}
		}
	}

	if let Some(s) = start {
		out.push((s, &text[s..]));
	}

	out
}

#[derive(Clone, Copy)]
enum LexState {
	Root,
	Quoted(char),
	Escaped(char),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tokenize_blobs() {
		let text = "summon area_effect_cloud ~ ~1 ~ {Particle:{Type:\"flame\"}, Tags:[\"a b\"]}";
		let tokens: Vec<_> = tokenize(text)
			.into_iter()
			.map(|x| x.1)
			.collect();
		assert_eq!(
			tokens,
			vec![
				"summon",
				"area_effect_cloud",
				"~",
				"~1",
				"~",
				"{Particle:{Type:\"flame\"}, Tags:[\"a b\"]}"
			]
		);
	}

	#[test]
	fn test_tokenize_quotes() {
		let tokens: Vec<_> = tokenize(r#"tellraw @a[tag=x, limit=1] "a \" }b""#)
			.into_iter()
			.map(|x| x.1)
			.collect();
		assert_eq!(tokens, vec!["tellraw", "@a[tag=x, limit=1]", r#""a \" }b""#]);
	}

	#[test]
	fn test_tokenize_apostrophe() {
		let tokens: Vec<_> = tokenize("say don't {a:'b c'}").into_iter().map(|x| x.1).collect();
		assert_eq!(tokens, vec!["say", "don't", "{a:'b c'}"]);
	}

	#[test]
	fn test_parse_kinds() {
		assert_eq!(Command::parse(1, "   ").kind, CommandKind::Blank);
		let comment = Command::parse(2, "# summon armor_stand");
		assert_eq!(comment.kind, CommandKind::Comment);
		assert_eq!(comment.key, None);
		assert!(comment.args.is_empty());

		let cmd = Command::parse(3, "  summon armor_stand ~ ~ ~ {Marker:1b}  ");
		assert!(cmd.is_command());
		assert_eq!(cmd.raw, "summon armor_stand ~ ~ ~ {Marker:1b}");
		assert_eq!(cmd.key.as_deref(), Some("summon"));
		assert_eq!(cmd.args.len(), 5);
	}

	#[test]
	fn test_parse_execute_run() {
		let cmd = Command::parse(4, "execute as @a at @s run summon marker ~ ~ ~");
		let nested = cmd.run.as_deref().unwrap();
		assert_eq!(nested.raw, "summon marker ~ ~ ~");
		assert_eq!(nested.key.as_deref(), Some("summon"));
		assert_eq!(nested.line, 4);
		assert_eq!(cmd.own_text(), "execute as @a at @s run");
		assert_eq!(nested.own_text(), "summon marker ~ ~ ~");
		assert_eq!(cmd.chain().count(), 2);
	}

	#[test]
	fn test_run_as_argument() {
		let cmd = Command::parse(
			1,
			"execute store result score run obj if score run obj matches 1 run replaceitem block ~ ~ ~ container.0 stone",
		);
		let nested = cmd.run.as_deref().unwrap();
		assert_eq!(nested.key.as_deref(), Some("replaceitem"));

		let cmd = Command::parse(1, "execute positioned as run at @s run say hi");
		assert_eq!(cmd.run.as_deref().unwrap().raw, "say hi");

		let cmd = Command::parse(1, "execute if entity run run say hi");
		assert_eq!(cmd.run.as_deref().unwrap().raw, "say hi");
	}

	#[test]
	fn test_execute_subcommand_lengths() {
		let cmd = Command::parse(
			1,
			"execute if blocks ~ ~ ~ ~1 ~1 ~1 ~ ~5 ~ all unless data block ~ ~ ~ Items facing entity @p eyes rotated ~ 0 run say hi",
		);
		assert_eq!(cmd.run.as_deref().unwrap().raw, "say hi");

		let cmd = Command::parse(1, "execute store success storage foo:bar path int 1 in minecraft:the_end run say hi");
		assert_eq!(cmd.run.as_deref().unwrap().raw, "say hi");
	}

	#[test]
	fn test_unknown_subcommand_falls_back() {
		let cmd = Command::parse(1, "execute on passengers run say hi");
		assert_eq!(cmd.run.as_deref().unwrap().raw, "say hi");
	}

	#[test]
	fn test_execute_without_run() {
		let cmd = Command::parse(1, "execute if entity @s[tag=run] run");
		assert!(cmd.run.is_none());
		assert_eq!(cmd.chain().count(), 1);
	}
}
