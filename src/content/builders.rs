use super::{ContentFragment, ContentToken, Element, ElementKind, ListStyle, TemplateDescriptor};

/// Content of one list item: plain text is wrapped in a paragraph,
/// structured content is used as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItemContent {
	Text(String),
	Content(ContentFragment),
}

impl From<&str> for ListItemContent {
	fn from(text: &str) -> Self {
		ListItemContent::Text(text.to_string())
	}
}

impl From<String> for ListItemContent {
	fn from(text: String) -> Self {
		ListItemContent::Text(text)
	}
}

impl From<ContentFragment> for ListItemContent {
	fn from(content: ContentFragment) -> Self {
		ListItemContent::Content(content)
	}
}

/// Builders for the content fragments rule sets use on either side of a
/// replacement.
///
/// Every builder is pure: each call returns a freshly allocated fragment.
/// Rule sets receive a `Helpers` value alongside the extension point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Helpers;

impl Helpers {
	/// Start of a paragraph followed by `text`, left open.
	///
	/// Only meaningful as a pattern: "the paragraph typed so far".
	pub fn paragraph_open(&self, text: &str) -> ContentFragment {
		std::iter::once(ContentToken::Open(Element::Paragraph))
			.chain(text.chars().map(ContentToken::Char))
			.collect()
	}

	/// A complete paragraph. Pass `""` for an empty one.
	pub fn paragraph(&self, content: impl Into<ContentFragment>) -> ContentFragment {
		wrap(Element::Paragraph, content.into())
	}

	/// A list with one item per entry. No entries yields a single empty item.
	pub fn list<I>(&self, items: I, style: ListStyle) -> ContentFragment
	where
		I: IntoIterator,
		I::Item: Into<ListItemContent>,
	{
		let mut items: Vec<ListItemContent> = items.into_iter().map(Into::into).collect();
		if items.is_empty() {
			items.push(ListItemContent::Text(String::new()));
		}

		let body = ContentFragment::concat(items.into_iter().map(|item| {
			let content = match item {
				ListItemContent::Text(text) => self.paragraph(text),
				ListItemContent::Content(content) => content,
			};
			wrap(Element::ListItem, content)
		}));

		wrap(Element::List { style }, body)
	}

	/// Bullet list with one empty item.
	pub fn blank_list(&self) -> ContentFragment {
		self.list(Vec::<ListItemContent>::new(), ListStyle::Bullet)
	}

	/// Citation list placeholder for the given reference group (`""` for the default group).
	pub fn refs_list(&self, group: &str) -> ContentFragment {
		wrap(
			Element::ReferencesList {
				group: group.to_string(),
			},
			ContentFragment::new(),
		)
	}

	/// Level-2 heading. Unless `skip_trailing_paragraph` is set, an empty
	/// paragraph follows so there is somewhere to keep typing.
	pub fn h2(&self, text: &str, skip_trailing_paragraph: bool) -> ContentFragment {
		let heading = wrap(Element::Heading { level: 2 }, ContentFragment::text(text));
		if skip_trailing_paragraph {
			heading
		} else {
			heading.chain(self.paragraph(""))
		}
	}

	/// Template transclusion, inline or as its own block.
	pub fn tpl(&self, template: TemplateDescriptor, block: bool) -> ContentFragment {
		wrap(Element::Transclusion { block, template }, ContentFragment::new())
	}
}

fn wrap(element: Element, content: ContentFragment) -> ContentFragment {
	let kind: ElementKind = element.kind();
	std::iter::once(ContentToken::Open(element))
		.chain(content.into_tokens())
		.chain(std::iter::once(ContentToken::Close(kind)))
		.collect()
}
