use gloo::utils::document;
use gloo_console::log;
use ui::counter_view::CounterView;

pub mod ui;

/// Id of the element the component mounts into. Falls back to `<body>`.
const MOUNT_ID: &str = "app";

fn main() {
    match document().get_element_by_id(MOUNT_ID) {
        Some(root) => {
            log!(format!("mounting counter view into #{}", MOUNT_ID));
            yew::Renderer::<CounterView>::with_root(root).render();
        }
        None => {
            log!("no mount point, rendering into body");
            yew::Renderer::<CounterView>::new().render();
        }
    }
}
