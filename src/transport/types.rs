use serde::Deserialize;

/// Top-level channel viewer document as served by the Mumble CVP endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StatusDocument {
    pub root: Channel,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    #[serde(rename = "x_connecturl")]
    pub connect_url: String,
    pub channels: Vec<Channel>,
    pub users: Vec<User>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    /// Registered user id; unregistered users report a non-positive value.
    #[serde(rename = "userid")]
    pub user_id: i64,
    pub suppress: bool,
    #[serde(rename = "selfDeaf")]
    pub self_deaf: bool,
    pub deaf: bool,
    #[serde(rename = "selfMute")]
    pub self_mute: bool,
    pub mute: bool,
}

impl Channel {
    pub fn new(name: impl Into<String>, connect_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connect_url: connect_url.into(),
            channels: Vec::new(),
            users: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.channels.is_empty() || !self.users.is_empty()
    }
}

impl User {
    pub fn new(name: impl Into<String>, user_id: i64) -> Self {
        Self {
            name: name.into(),
            user_id,
            suppress: false,
            self_deaf: false,
            deaf: false,
            self_mute: false,
            mute: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id > 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, StatusDocument, User};

    /// Wire names map onto the Rust field names and unknown fields are ignored.
    #[test]
    fn document_deserializes_cvp_field_names() {
        // Arrange
        let raw = r#"{
            "name": "Server",
            "root": {
                "id": 0,
                "name": "Root",
                "x_connecturl": "mumble://host/Root",
                "channels": [],
                "users": [{
                    "session": 3,
                    "userid": 5,
                    "name": "Alice",
                    "suppress": false,
                    "selfDeaf": true,
                    "deaf": false,
                    "selfMute": true,
                    "mute": false
                }]
            }
        }"#;

        // Act
        let document: StatusDocument = serde_json::from_str(raw).expect("decode failed");

        // Assert
        assert_eq!(document.root.name, "Root");
        assert_eq!(document.root.connect_url, "mumble://host/Root");
        let user = &document.root.users[0];
        assert_eq!(user.user_id, 5);
        assert!(user.self_deaf);
        assert!(user.self_mute);
        assert!(!user.deaf);
    }

    /// Only positive ids count as authenticated.
    #[test]
    fn authentication_requires_positive_id() {
        assert!(User::new("a", 1).is_authenticated());
        assert!(!User::new("b", 0).is_authenticated());
        assert!(!User::new("c", -1).is_authenticated());
    }

    #[test]
    fn has_children_checks_channels_and_users() {
        let mut channel = Channel::new("Lobby", "mumble://host/Lobby");
        assert!(!channel.has_children());

        channel.users.push(User::new("Bob", 0));
        assert!(channel.has_children());

        channel.users.clear();
        channel.channels.push(Channel::new("Sub", "mumble://host/Lobby/Sub"));
        assert!(channel.has_children());
    }
}
