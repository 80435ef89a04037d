#[cfg(test)]
pub const DOCUMENT_JSON: &str = r##"{
  "root": {
    "type": "root",
    "format": "",
    "indent": 0,
    "version": 1,
    "children": [
      {
        "type": "heading",
        "tag": "h1",
        "children": [
          { "type": "text", "text": "Why the sky is dark at night", "format": 0 }
        ]
      },
      {
        "type": "paragraph",
        "format": "",
        "children": [
          { "type": "text", "text": "Read ", "format": 0 },
          {
            "type": "link",
            "fields": { "url": "https://en.wikipedia.org/wiki/Olbers_paradox", "newTab": true },
            "children": [
              { "type": "text", "text": "the paradox", "format": 2 }
            ]
          },
          { "type": "text", "text": " first.", "format": 0 }
        ]
      },
      {
        "type": "list",
        "listType": "number",
        "children": [
          { "type": "listitem", "value": 1, "children": [ { "type": "text", "text": "Olbers", "format": 1 } ] },
          { "type": "listitem", "value": 2, "children": [ { "type": "text", "text": "Expansion", "format": 2 } ] }
        ]
      },
      {
        "type": "quote",
        "children": [
          { "type": "text", "text": "The cosmos is within us.", "format": 0 }
        ]
      },
      {
        "type": "upload",
        "relationTo": "media",
        "value": { "id": "65f1", "url": "/media/andromeda.jpg", "alt": "Andromeda galaxy" }
      },
      { "type": "horizontalrule", "version": 1 }
    ]
  }
}"##;

#[cfg(test)]
pub const CATEGORIES_JSON: &str = r##"[
  { "id": "c-space", "name": "Space", "slug": "space" },
  { "id": "c-physics", "name": "Physics", "slug": "physics" },
  { "id": "c-biology", "name": "Biology", "slug": "biology" }
]"##;
