/// A parsed RSS/Atom feed, entries kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    /// Empty if the entry carries no usable link.
    pub link: String,
}

impl From<feed_rs::model::Feed> for Feed {
    fn from(feed: feed_rs::model::Feed) -> Self {
        Self {
            title: feed.title.map(|t| t.content),
            entries: feed.entries.iter().map(FeedEntry::from).collect(),
        }
    }
}

impl From<&feed_rs::model::Entry> for FeedEntry {
    fn from(entry: &feed_rs::model::Entry) -> Self {
        Self {
            title: entry.title.as_ref().map(|t| t.content.clone()),
            link: entry_link(entry),
        }
    }
}

fn entry_link(entry: &feed_rs::model::Entry) -> String {
    // Prefer the alternate link, that's where Atom feeds put the watch page
    let alternate = entry.links.iter().find(|l| {
        let rel = l.rel.as_deref().unwrap_or("");
        !l.href.trim().is_empty() && (rel.is_empty() || rel.eq_ignore_ascii_case("alternate"))
    });
    if let Some(link) = alternate.or_else(|| entry.links.iter().find(|l| !l.href.trim().is_empty()))
    {
        return link.href.trim().to_owned();
    }

    let id = entry.id.trim();
    if id.starts_with("http://") || id.starts_with("https://") {
        return id.to_owned();
    }
    String::new()
}
