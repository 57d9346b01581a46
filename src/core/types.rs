pub use zaia_types::{Hint, ProcessDescriptor, ProcessStatus, Program, ToolHints};
