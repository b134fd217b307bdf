//! Static templates for generated component sources
//!
//! Rendering is literal token substitution, nothing more. Tokens:
//! `%NAME%` (component class name), `%GUARD%` (include guard),
//! `%HEADER_PATH%` (path of the generated header, as included from the
//! project root).
//!
//! The binding template registers the component explicitly: it defines a
//! `register<Name>Component` function that the engine calls during its
//! binding-initialization pass, instead of relying on load-time
//! self-registration.

use super::ComponentSpec;

pub const HEADER_TEMPLATE: &str = r#"#ifndef %GUARD%
#define %GUARD% %GUARD%

#include "compsys/Component.hpp"
#include <string>

class %NAME%: public Component {
public:
    %NAME%();
    ~%NAME%();

private:

};

#endif
"#;

pub const SOURCE_TEMPLATE: &str = r#"#include "%NAME%.hpp"

%NAME%::%NAME%()
{
}

%NAME%::~%NAME%()
{
}
"#;

pub const META_TEMPLATE: &str = r#"#include "%HEADER_PATH%"

#include "compsys/ComponentRegistry.hpp"
#include "luaexport/LuaBinding.hpp"

static char const libname[] = "%NAME%";

void register%NAME%Component(ComponentRegistry& registry)
{
    registry.add(libname, [](LuaBinding& lua) {
        lua.module("ComponentSystem")
            .exportClass<%NAME%, Component>(libname);
    });
}
"#;

/// Substitute the spec's name, guard and header path into a template
pub fn render(template: &str, spec: &ComponentSpec) -> String {
    template
        .replace("%GUARD%", &spec.include_guard())
        .replace("%HEADER_PATH%", &spec.header_path())
        .replace("%NAME%", spec.name())
}
