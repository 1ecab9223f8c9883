mod drawer_component;

pub use drawer_component::DrawerComponent;
