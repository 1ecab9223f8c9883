//! In-app location history.
//!
//! Plays the role a browser's location bar plays for the original site: it
//! owns the current path and a back/forward history. It knows nothing about
//! the route table; the navigation state is re-derived from the current path
//! after every change, including history moves that change the path out from
//! under the header.

#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<String>,
    index: usize,
}

impl Router {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            history: vec![start.into()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.history[self.index]
    }

    /// Pushes a new location, discarding any forward history.
    ///
    /// Navigating to the current path is a no-op and is not stacked.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.current() == path {
            return false;
        }
        self.history.truncate(self.index + 1);
        self.history.push(path.to_string());
        self.index += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.history.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn can_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Router;

    #[test]
    fn navigation_pushes_and_history_walks() {
        let mut router = Router::new("/");
        assert!(router.navigate("/services"));
        assert!(router.navigate("/about"));
        assert_eq!(router.current(), "/about");

        assert!(router.back());
        assert_eq!(router.current(), "/services");
        assert!(router.back());
        assert_eq!(router.current(), "/");
        assert!(!router.back(), "history bottomed out");

        assert!(router.forward());
        assert!(router.forward());
        assert_eq!(router.current(), "/about");
        assert!(!router.forward(), "history topped out");
    }

    #[test]
    fn navigating_truncates_forward_history() {
        let mut router = Router::new("/");
        router.navigate("/services");
        router.navigate("/about");
        router.back();
        router.back();
        assert!(router.can_forward());

        router.navigate("/contact");
        assert!(!router.can_forward());
        assert_eq!(router.current(), "/contact");
        assert!(router.back());
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn repeat_navigation_is_a_no_op() {
        let mut router = Router::new("/");
        router.navigate("/services");
        assert!(!router.navigate("/services"));
        assert!(router.back());
        assert!(!router.back());
    }
}
