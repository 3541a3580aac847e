//! Built-in skeletons for every template kind.
//!
//! File contents are opaque data: placeholders (`{{KEY}}`) and conditional blocks are left
//! for the customization engine. Build scripts are assembled once per target shape when the
//! catalog is built.

use crate::options::Options;
use crate::tags::{BuildSystem, CiSystem, EditorKind, PackageManager, Tag, TemplateKind, TestFramework};
use crate::template::{TemplateFile, TemplateSkeleton};

/// What the main build target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Executable,
    Library,
    HeaderOnly,
    MultiExecutable,
}

impl Shape {
    fn of(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Lib | TemplateKind::TestProject => Shape::Library,
            TemplateKind::HeaderOnlyLib => Shape::HeaderOnly,
            TemplateKind::MultiExecutable => Shape::MultiExecutable,
            _ => Shape::Executable,
        }
    }
}

/// Builds the skeleton for `kind`.
pub fn skeleton(kind: TemplateKind) -> TemplateSkeleton {
    let mut skeleton = match kind {
        TemplateKind::Console => console(),
        TemplateKind::Lib => library(),
        TemplateKind::HeaderOnlyLib => header_only(),
        TemplateKind::MultiExecutable => multi_executable(),
        TemplateKind::Gui => gui(),
        TemplateKind::Network => network(),
        TemplateKind::Embedded => embedded(),
        TemplateKind::WebService => web_service(),
        TemplateKind::GameEngine => game_engine(),
        TemplateKind::QtApp => qt_app(),
        TemplateKind::SfmlApp => sfml_app(),
        TemplateKind::BoostApp => boost_app(),
        TemplateKind::TestProject => test_project(),
    };
    skeleton.files.extend(build_files(Shape::of(kind)));
    skeleton.files.extend(common_files());
    skeleton
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn uses_build(options: &Options, build: BuildSystem) -> bool {
    options.build_system == build
}

fn uses_package(options: &Options, package: PackageManager) -> bool {
    options.package_manager == package
}

fn console() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "tests"]),
        available_features: features(&["cli11", "logging"]),
        default_features: features(&["cli11"]),
        files: vec![
            TemplateFile::new("src/main.cpp", CONSOLE_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/app.hpp", APP_HEADER),
            TemplateFile::new("src/app.cpp", APP_SOURCE),
            TemplateFile::new("include/{{PROJECT_NAME}}/cli.hpp", CLI_HEADER).requires("cli11"),
            TemplateFile::new("include/{{PROJECT_NAME}}/log.hpp", LOG_HEADER).requires("logging"),
        ],
    }
}

fn library() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["include", "src", "tests", "examples"]),
        available_features: features(&["static-lib", "shared-lib", "examples", "benchmarks"]),
        default_features: features(&["static-lib", "examples"]),
        files: vec![
            TemplateFile::new("include/{{PROJECT_NAME}}/{{PROJECT_NAME}}.hpp", LIBRARY_HEADER),
            TemplateFile::new("src/{{PROJECT_NAME}}.cpp", LIBRARY_SOURCE),
            TemplateFile::new("include/{{PROJECT_NAME}}/export.hpp", EXPORT_HEADER)
                .requires("shared-lib"),
            TemplateFile::new("examples/basic.cpp", LIBRARY_EXAMPLE)
                .requires("examples")
                .when(|options| options.include_code_examples),
            TemplateFile::new("benchmarks/bench_main.cpp", BENCHMARK_MAIN).requires("benchmarks"),
        ],
    }
}

fn header_only() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["include", "tests", "examples"]),
        available_features: features(&["single-header", "examples"]),
        default_features: features(&["single-header", "examples"]),
        files: vec![
            TemplateFile::new("include/{{PROJECT_NAME}}/{{PROJECT_NAME}}.hpp", HEADER_ONLY_HEADER),
            TemplateFile::new("single_include/{{PROJECT_NAME}}.hpp", SINGLE_INCLUDE)
                .requires("single-header"),
            TemplateFile::new("examples/basic.cpp", LIBRARY_EXAMPLE)
                .requires("examples")
                .when(|options| options.include_code_examples),
        ],
    }
}

fn multi_executable() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["apps", "src", "include"]),
        available_features: features(&["shared-core"]),
        default_features: features(&["shared-core"]),
        files: vec![
            TemplateFile::new("apps/client/main.cpp", MULTI_CLIENT_MAIN),
            TemplateFile::new("apps/server/main.cpp", MULTI_SERVER_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/core.hpp", CORE_HEADER).requires("shared-core"),
            TemplateFile::new("src/core.cpp", CORE_SOURCE).requires("shared-core"),
        ],
    }
}

fn uses_qt(options: &Options) -> bool {
    options.gui_frameworks.iter().any(|framework| framework.to_lowercase().starts_with("qt"))
}

fn gui() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "resources"]),
        available_features: features(&["resources"]),
        default_features: features(&["resources"]),
        files: vec![
            TemplateFile::new("src/main.cpp", GUI_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/main_window.hpp", MAIN_WINDOW_HEADER),
            TemplateFile::new("src/main_window.cpp", MAIN_WINDOW_SOURCE),
            TemplateFile::new("resources/resources.qrc", QT_RESOURCES)
                .requires("resources")
                .when(uses_qt),
            TemplateFile::new("resources/README.md", RESOURCES_README).requires("resources"),
        ],
    }
}

fn network() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include"]),
        available_features: features(&["client", "server", "json"]),
        default_features: features(&["client", "server"]),
        files: vec![
            TemplateFile::new("src/main.cpp", NETWORK_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/server.hpp", SERVER_HEADER).requires("server"),
            TemplateFile::new("src/server.cpp", SERVER_SOURCE).requires("server"),
            TemplateFile::new("include/{{PROJECT_NAME}}/client.hpp", CLIENT_HEADER).requires("client"),
            TemplateFile::new("src/client.cpp", CLIENT_SOURCE).requires("client"),
            TemplateFile::new("include/{{PROJECT_NAME}}/protocol.hpp", PROTOCOL_HEADER).requires("json"),
        ],
    }
}

fn embedded() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "hal", "drivers"]),
        available_features: features(&["hal", "drivers", "rtos"]),
        default_features: features(&["hal", "drivers"]),
        files: vec![
            TemplateFile::new("src/main.cpp", EMBEDDED_MAIN),
            TemplateFile::new("hal/hal.hpp", HAL_HEADER).requires("hal"),
            TemplateFile::new("drivers/gpio.hpp", GPIO_HEADER).requires("drivers"),
            TemplateFile::new("drivers/gpio.cpp", GPIO_SOURCE).requires("drivers"),
            TemplateFile::new("src/tasks.cpp", RTOS_TASKS).requires("rtos"),
            TemplateFile::new("cmake/arm-none-eabi.cmake", ARM_TOOLCHAIN)
                .when(|options| uses_build(options, BuildSystem::CMake)),
        ],
    }
}

fn web_service() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "configs"]),
        available_features: features(&["rest", "database", "authentication", "docker"]),
        default_features: features(&["rest", "docker"]),
        files: vec![
            TemplateFile::new("src/main.cpp", WEB_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/routes.hpp", ROUTES_HEADER).requires("rest"),
            TemplateFile::new("src/routes.cpp", ROUTES_SOURCE).requires("rest"),
            TemplateFile::new("src/database.cpp", DATABASE_SOURCE).requires("database"),
            TemplateFile::new("src/auth.cpp", AUTH_SOURCE).requires("authentication"),
            TemplateFile::new("Dockerfile", DOCKERFILE).requires("docker"),
            TemplateFile::new("configs/server.json", SERVER_CONFIG),
        ],
    }
}

fn game_engine() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "assets", "shaders"]),
        available_features: features(&["opengl", "vulkan", "audio", "assets"]),
        default_features: features(&["opengl", "assets"]),
        files: vec![
            TemplateFile::new("src/main.cpp", GAME_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/engine.hpp", ENGINE_HEADER),
            TemplateFile::new("src/engine.cpp", ENGINE_SOURCE),
            TemplateFile::new("src/renderer_gl.cpp", GL_RENDERER).requires("opengl"),
            TemplateFile::new("src/renderer_vk.cpp", VK_RENDERER).requires("vulkan"),
            TemplateFile::new("src/audio.cpp", AUDIO_SOURCE).requires("audio"),
            TemplateFile::new("assets/README.md", ASSETS_README).requires("assets"),
            TemplateFile::new("shaders/basic.vert", VERTEX_SHADER).when(|options| options.include_shaders),
            TemplateFile::new("shaders/basic.frag", FRAGMENT_SHADER).when(|options| options.include_shaders),
        ],
    }
}

fn qt_app() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "resources", "ui"]),
        available_features: features(&["widgets", "qml", "translations"]),
        default_features: features(&["widgets"]),
        files: vec![
            TemplateFile::new("src/main.cpp", QT_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/main_window.hpp", MAIN_WINDOW_HEADER)
                .requires("widgets"),
            TemplateFile::new("src/main_window.cpp", MAIN_WINDOW_SOURCE).requires("widgets"),
            TemplateFile::new("ui/main_window.ui", QT_UI_FORM).requires("widgets"),
            TemplateFile::new("qml/main.qml", QML_MAIN).requires("qml"),
            TemplateFile::new("translations/{{PROJECT_NAME}}_en.ts", QT_TRANSLATION)
                .requires("translations"),
            TemplateFile::new("resources/resources.qrc", QT_RESOURCES),
        ],
    }
}

fn sfml_app() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "assets"]),
        available_features: features(&["audio"]),
        default_features: Vec::new(),
        files: vec![
            TemplateFile::new("src/main.cpp", SFML_MAIN),
            TemplateFile::new("include/{{PROJECT_NAME}}/game.hpp", GAME_HEADER),
            TemplateFile::new("src/game.cpp", GAME_SOURCE),
            TemplateFile::new("src/sound.cpp", SFML_SOUND).requires("audio"),
            TemplateFile::new("shaders/basic.frag", FRAGMENT_SHADER).when(|options| options.include_shaders),
        ],
    }
}

fn boost_app() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include"]),
        available_features: features(&["program-options", "asio", "filesystem"]),
        default_features: features(&["program-options"]),
        files: vec![
            TemplateFile::new("src/main.cpp", BOOST_MAIN),
            TemplateFile::new("src/options.cpp", BOOST_OPTIONS).requires("program-options"),
            TemplateFile::new("src/io_context.cpp", BOOST_ASIO).requires("asio"),
            TemplateFile::new("src/files.cpp", BOOST_FILESYSTEM).requires("filesystem"),
        ],
    }
}

fn test_project() -> TemplateSkeleton {
    TemplateSkeleton {
        directories: features(&["src", "include", "tests"]),
        available_features: features(&["mocks", "coverage"]),
        default_features: features(&["mocks"]),
        files: vec![
            TemplateFile::new("include/{{PROJECT_NAME}}/{{PROJECT_NAME}}.hpp", LIBRARY_HEADER),
            TemplateFile::new("src/{{PROJECT_NAME}}.cpp", LIBRARY_SOURCE),
            TemplateFile::new("tests/mocks/mock_clock.hpp", MOCK_CLOCK).requires("mocks"),
            TemplateFile::new("cmake/coverage.cmake", COVERAGE_CMAKE)
                .requires("coverage")
                .when(|options| uses_build(options, BuildSystem::CMake)),
        ],
    }
}

fn build_files(shape: Shape) -> Vec<TemplateFile> {
    let cmake_target = match shape {
        Shape::Executable => CMAKE_EXECUTABLE,
        Shape::Library => CMAKE_LIBRARY,
        Shape::HeaderOnly => CMAKE_INTERFACE,
        Shape::MultiExecutable => CMAKE_MULTI,
    };
    let meson_target = match shape {
        Shape::Executable | Shape::MultiExecutable => MESON_EXECUTABLE,
        Shape::Library => MESON_LIBRARY,
        Shape::HeaderOnly => MESON_INTERFACE,
    };
    let (bazel_rule, xmake_kind, premake_kind) = match shape {
        Shape::Executable | Shape::MultiExecutable => ("cc_binary", "binary", "ConsoleApp"),
        Shape::Library => ("cc_library", "static", "StaticLib"),
        Shape::HeaderOnly => ("cc_library", "headeronly", "Utility"),
    };
    let make_target = match shape {
        Shape::Executable | Shape::MultiExecutable => MAKE_EXECUTABLE,
        Shape::Library | Shape::HeaderOnly => MAKE_LIBRARY,
    };

    vec![
        TemplateFile::new("CMakeLists.txt", [CMAKE_HEADER, cmake_target, CMAKE_FOOTER].concat())
            .when(|options| uses_build(options, BuildSystem::CMake)),
        TemplateFile::new("meson.build", [MESON_HEADER, meson_target, MESON_FOOTER].concat())
            .when(|options| uses_build(options, BuildSystem::Meson)),
        TemplateFile::new("BUILD.bazel", BAZEL_BUILD.replace("@RULE@", bazel_rule))
            .when(|options| uses_build(options, BuildSystem::Bazel)),
        TemplateFile::new("MODULE.bazel", BAZEL_MODULE)
            .when(|options| uses_build(options, BuildSystem::Bazel)),
        TemplateFile::new("xmake.lua", XMAKE_BUILD.replace("@KIND@", xmake_kind))
            .when(|options| uses_build(options, BuildSystem::XMake)),
        TemplateFile::new("premake5.lua", PREMAKE_BUILD.replace("@KIND@", premake_kind))
            .when(|options| uses_build(options, BuildSystem::Premake)),
        TemplateFile::new("Makefile", [MAKE_HEADER, make_target].concat())
            .when(|options| uses_build(options, BuildSystem::Make)),
        TemplateFile::new("build.ninja", NINJA_BUILD)
            .when(|options| uses_build(options, BuildSystem::Ninja)),
        TemplateFile::new("scripts/build.sh", BUILD_SCRIPT)
            .as_executable()
            .when(|options| uses_build(options, BuildSystem::CMake)),
        TemplateFile::new("vcpkg.json", VCPKG_MANIFEST)
            .when(|options| uses_package(options, PackageManager::Vcpkg)),
        TemplateFile::new("conanfile.txt", CONAN_FILE)
            .when(|options| uses_package(options, PackageManager::Conan)),
        TemplateFile::new("spack.yaml", SPACK_ENVIRONMENT)
            .when(|options| uses_package(options, PackageManager::Spack)),
        TemplateFile::new("cmake/HunterGate.cmake", HUNTER_GATE)
            .when(|options| uses_package(options, PackageManager::Hunter)),
        TemplateFile::new("cmake/CPM.cmake", CPM_BOOTSTRAP)
            .when(|options| uses_package(options, PackageManager::Cpm)),
        TemplateFile::new("cmake/Dependencies.cmake", FETCH_CONTENT)
            .when(|options| uses_package(options, PackageManager::FetchContent)),
    ]
}

/// `tests/CMakeLists.txt` wired to the package and target of `framework`.
fn cmake_test_file(framework: TestFramework) -> TemplateFile {
    let (package, target) = match framework {
        TestFramework::GTest => ("GTest", "GTest::gtest_main"),
        TestFramework::Catch2 => ("Catch2 3", "Catch2::Catch2WithMain"),
        TestFramework::Doctest => ("doctest", "doctest::doctest"),
        TestFramework::Boost => ("Boost COMPONENTS unit_test_framework", "Boost::unit_test_framework"),
        TestFramework::None => ("", ""),
    };
    let content = CMAKE_TESTS.replace("@PACKAGE@", package).replace("@TARGET@", target);
    TemplateFile::new("tests/CMakeLists.txt", content)
        .requires("testing")
        .requires(format!("test-{}", framework.as_str()))
        .when(|options| uses_build(options, BuildSystem::CMake))
}

fn test_file(framework: TestFramework, content: &str) -> TemplateFile {
    TemplateFile::new("tests/test_main.cpp", content)
        .requires("testing")
        .requires(format!("test-{}", framework.as_str()))
}

fn ci_file(system: CiSystem, path: &str, content: &str) -> TemplateFile {
    TemplateFile::new(path, content).requires(format!("ci-{}", system.as_str()))
}

fn editor_file(editor: EditorKind, path: &str, content: &str) -> TemplateFile {
    TemplateFile::new(path, content).requires(format!("editor-{}", editor.as_str()))
}

fn common_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("README.md", README),
        test_file(TestFramework::GTest, GTEST_MAIN),
        test_file(TestFramework::Catch2, CATCH2_MAIN),
        test_file(TestFramework::Doctest, DOCTEST_MAIN),
        test_file(TestFramework::Boost, BOOST_TEST_MAIN),
        cmake_test_file(TestFramework::GTest),
        cmake_test_file(TestFramework::Catch2),
        cmake_test_file(TestFramework::Doctest),
        cmake_test_file(TestFramework::Boost),
        TemplateFile::new("docs/README.md", DOCS_INDEX).requires("documentation"),
        TemplateFile::new("Doxyfile", DOXYFILE).requires("documentation").requires("doxygen"),
        TemplateFile::new("CHANGELOG.md", CHANGELOG).when(|options| options.generate_changelog),
        TemplateFile::new(".clang-format", CLANG_FORMAT).requires("clang-format"),
        TemplateFile::new(".clang-tidy", CLANG_TIDY).requires("clang-tidy"),
        TemplateFile::new(".editorconfig", EDITORCONFIG).requires("code-style"),
        ci_file(CiSystem::GitHub, ".github/workflows/ci.yml", GITHUB_WORKFLOW),
        ci_file(CiSystem::GitLab, ".gitlab-ci.yml", GITLAB_CI),
        ci_file(CiSystem::Travis, ".travis.yml", TRAVIS_CI),
        ci_file(CiSystem::AppVeyor, "appveyor.yml", APPVEYOR),
        ci_file(CiSystem::Azure, "azure-pipelines.yml", AZURE_PIPELINES),
        ci_file(CiSystem::CircleCi, ".circleci/config.yml", CIRCLECI),
        editor_file(EditorKind::VsCode, ".vscode/settings.json", VSCODE_SETTINGS),
        editor_file(EditorKind::VsCode, ".vscode/extensions.json", VSCODE_EXTENSIONS),
        editor_file(EditorKind::CLion, ".idea/.name", "{{PROJECT_NAME}}\n"),
        editor_file(EditorKind::VisualStudio, "CMakeSettings.json", VS_CMAKE_SETTINGS),
        editor_file(EditorKind::Vim, ".vimrc", VIMRC),
        editor_file(EditorKind::Emacs, ".dir-locals.el", DIR_LOCALS),
        editor_file(EditorKind::Sublime, "{{PROJECT_NAME}}.sublime-project", SUBLIME_PROJECT),
    ]
}

const README: &str = r#"# {{PROJECT_NAME}}

{{PROJECT_DESCRIPTION}}

## Building

This project targets C++{{CPP_STANDARD_NUM}} and builds with {{BUILD_SYSTEM}} ({{BUILD_TYPE}} by default).
Dependencies are managed with {{PACKAGE_MANAGER}}.
{{#IF ENABLE_TESTING}}
## Testing

Tests use {{TEST_FRAMEWORK}} and live in `tests/`.
{{/IF}}{{#IF ENABLE_DOCS}}
## Documentation

Project documentation lives in `docs/`.
{{/IF}}{{#IF ENABLE_LICENSE}}
## License

Released under the {{LICENSE_KIND}} license. Copyright (c) {{CURRENT_YEAR}} {{AUTHOR_NAME}}.
{{/IF}}"#;

const CMAKE_HEADER: &str = r#"cmake_minimum_required(VERSION {{CMAKE_MINIMUM_VERSION}})
project({{PROJECT_NAME}} VERSION 0.1.0 DESCRIPTION "{{PROJECT_DESCRIPTION}}" LANGUAGES CXX)

set(CMAKE_CXX_STANDARD {{CPP_STANDARD_NUM}})
set(CMAKE_CXX_STANDARD_REQUIRED ON)
set(CMAKE_CXX_EXTENSIONS OFF)
set(CMAKE_EXPORT_COMPILE_COMMANDS ON)

if(NOT CMAKE_BUILD_TYPE)
  set(CMAKE_BUILD_TYPE {{BUILD_TYPE}})
endif()

option({{PROJECT_NAME_UPPER}}_BUILD_TESTS "Build the tests" {{ENABLE_TESTING}})
option({{PROJECT_NAME_UPPER}}_BUILD_DOCS "Build the documentation" {{ENABLE_DOXYGEN}})

"#;

const CMAKE_EXECUTABLE: &str = r#"file(GLOB_RECURSE PROJECT_SOURCES CONFIGURE_DEPENDS src/*.cpp)
add_executable(${PROJECT_NAME} ${PROJECT_SOURCES})
target_include_directories(${PROJECT_NAME} PRIVATE include)
"#;

const CMAKE_LIBRARY: &str = r#"file(GLOB_RECURSE PROJECT_SOURCES CONFIGURE_DEPENDS src/*.cpp)
add_library(${PROJECT_NAME} ${PROJECT_SOURCES})
add_library({{PROJECT_NAME}}::{{PROJECT_NAME}} ALIAS ${PROJECT_NAME})
target_include_directories(${PROJECT_NAME} PUBLIC
  $<BUILD_INTERFACE:${CMAKE_CURRENT_SOURCE_DIR}/include>
  $<INSTALL_INTERFACE:include>)
install(TARGETS ${PROJECT_NAME} EXPORT {{PROJECT_NAME}}Targets)
install(DIRECTORY include/ DESTINATION include)
"#;

const CMAKE_INTERFACE: &str = r#"add_library(${PROJECT_NAME} INTERFACE)
add_library({{PROJECT_NAME}}::{{PROJECT_NAME}} ALIAS ${PROJECT_NAME})
target_include_directories(${PROJECT_NAME} INTERFACE
  $<BUILD_INTERFACE:${CMAKE_CURRENT_SOURCE_DIR}/include>
  $<INSTALL_INTERFACE:include>)
install(DIRECTORY include/ DESTINATION include)
"#;

const CMAKE_MULTI: &str = r#"add_library({{PROJECT_NAME_SNAKE}}_core src/core.cpp)
target_include_directories({{PROJECT_NAME_SNAKE}}_core PUBLIC include)

foreach(app client server)
  add_executable({{PROJECT_NAME_SNAKE}}_${app} apps/${app}/main.cpp)
  target_link_libraries({{PROJECT_NAME_SNAKE}}_${app} PRIVATE {{PROJECT_NAME_SNAKE}}_core)
endforeach()
"#;

const CMAKE_FOOTER: &str = r#"{{#IF ENABLE_TESTING}}
if({{PROJECT_NAME_UPPER}}_BUILD_TESTS)
  enable_testing()
  add_subdirectory(tests)
endif()
{{/IF}}{{#IF ENABLE_DOXYGEN}}
find_package(Doxygen)
if(DOXYGEN_FOUND AND {{PROJECT_NAME_UPPER}}_BUILD_DOCS)
  add_custom_target(docs ${DOXYGEN_EXECUTABLE} ${CMAKE_SOURCE_DIR}/Doxyfile
    WORKING_DIRECTORY ${CMAKE_SOURCE_DIR})
endif()
{{/IF}}"#;

const CMAKE_TESTS: &str = r#"find_package(@PACKAGE@ REQUIRED)

add_executable({{PROJECT_NAME_SNAKE}}_tests test_main.cpp)
target_include_directories({{PROJECT_NAME_SNAKE}}_tests PRIVATE ${PROJECT_SOURCE_DIR}/include)
target_link_libraries({{PROJECT_NAME_SNAKE}}_tests PRIVATE @TARGET@)
add_test(NAME {{PROJECT_NAME_SNAKE}}_tests COMMAND {{PROJECT_NAME_SNAKE}}_tests)
"#;

const MESON_HEADER: &str = r#"project('{{PROJECT_NAME}}', 'cpp',
  version : '0.1.0',
  default_options : ['cpp_std=c++{{CPP_STANDARD_NUM}}', 'warning_level=3'])

inc = include_directories('include')
"#;

const MESON_EXECUTABLE: &str = r#"executable('{{PROJECT_NAME}}', files('src/main.cpp'), include_directories : inc, install : true)
"#;

const MESON_LIBRARY: &str = r#"lib = library('{{PROJECT_NAME}}', files('src/{{PROJECT_NAME}}.cpp'), include_directories : inc, install : true)
{{PROJECT_NAME_SNAKE}}_dep = declare_dependency(include_directories : inc, link_with : lib)
"#;

const MESON_INTERFACE: &str = r#"{{PROJECT_NAME_SNAKE}}_dep = declare_dependency(include_directories : inc)
install_subdir('include', install_dir : get_option('includedir'))
"#;

const MESON_FOOTER: &str = r#"{{#IF ENABLE_TESTING}}
test_dep = dependency('{{TEST_FRAMEWORK}}')
test_exe = executable('{{PROJECT_NAME_SNAKE}}_tests', files('tests/test_main.cpp'),
  include_directories : inc, dependencies : test_dep)
test('{{PROJECT_NAME_SNAKE}}_tests', test_exe)
{{/IF}}"#;

const BAZEL_BUILD: &str = r#"@RULE@(
    name = "{{PROJECT_NAME_SNAKE}}",
    srcs = glob(["src/**/*.cpp"]),
    hdrs = glob(["include/**/*.hpp"]),
    includes = ["include"],
    copts = ["-std=c++{{CPP_STANDARD_NUM}}"],
)
{{#IF ENABLE_TESTING}}
cc_test(
    name = "{{PROJECT_NAME_SNAKE}}_tests",
    srcs = ["tests/test_main.cpp"],
    deps = ["@googletest//:gtest_main"],
)
{{/IF}}"#;

const BAZEL_MODULE: &str = r#"module(name = "{{PROJECT_NAME_SNAKE}}", version = "0.1.0")
{{#IF ENABLE_TESTING}}
bazel_dep(name = "googletest", version = "1.14.0")
{{/IF}}"#;

const XMAKE_BUILD: &str = r#"set_project("{{PROJECT_NAME}}")
set_version("0.1.0")
set_languages("c++{{CPP_STANDARD_NUM}}")
add_rules("mode.debug", "mode.release")

target("{{PROJECT_NAME}}")
    set_kind("@KIND@")
    add_includedirs("include", {public = true})
    add_files("src/*.cpp")
"#;

const PREMAKE_BUILD: &str = r#"workspace "{{PROJECT_NAME}}"
   configurations { "Debug", "Release" }

project "{{PROJECT_NAME}}"
   kind "@KIND@"
   language "C++"
   cppdialect "C++{{CPP_STANDARD_NUM}}"
   includedirs { "include" }
   files { "include/**.hpp", "src/**.cpp" }
"#;

const MAKE_HEADER: &str = r#"CXX ?= g++
CXXFLAGS ?= -std=c++{{CPP_STANDARD_NUM}} -Wall -Wextra -Iinclude
SOURCES := $(wildcard src/*.cpp)
OBJECTS := $(SOURCES:.cpp=.o)

"#;

const MAKE_EXECUTABLE: &str = r#"{{PROJECT_NAME}}: $(OBJECTS)
	$(CXX) $(CXXFLAGS) -o $@ $^

clean:
	rm -f $(OBJECTS) {{PROJECT_NAME}}

.PHONY: clean
"#;

const MAKE_LIBRARY: &str = r#"lib{{PROJECT_NAME}}.a: $(OBJECTS)
	$(AR) rcs $@ $^

clean:
	rm -f $(OBJECTS) lib{{PROJECT_NAME}}.a

.PHONY: clean
"#;

const NINJA_BUILD: &str = r#"cxxflags = -std=c++{{CPP_STANDARD_NUM}} -Wall -Wextra -Iinclude

rule cxx
  command = c++ $cxxflags -c $in -o $out

rule link
  command = c++ $in -o $out

build build/main.o: cxx src/main.cpp
build {{PROJECT_NAME}}: link build/main.o
"#;

const BUILD_SCRIPT: &str = r#"#!/usr/bin/env sh
set -e
cmake -S . -B build -DCMAKE_BUILD_TYPE={{BUILD_TYPE}}
cmake --build build --parallel
"#;

const VCPKG_MANIFEST: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version-string": "0.1.0",
  "dependencies": []
}
"#;

const CONAN_FILE: &str = r#"[requires]

[generators]
CMakeDeps
CMakeToolchain

[layout]
cmake_layout
"#;

const SPACK_ENVIRONMENT: &str = r#"spack:
  specs: []
  view: true
"#;

const HUNTER_GATE: &str = r#"# Download HunterGate.cmake from https://github.com/cpp-pm/gate and replace this file.
"#;

const CPM_BOOTSTRAP: &str = r#"set(CPM_DOWNLOAD_LOCATION "${CMAKE_BINARY_DIR}/cmake/CPM.cmake")
if(NOT EXISTS ${CPM_DOWNLOAD_LOCATION})
  file(DOWNLOAD https://github.com/cpm-cmake/CPM.cmake/releases/latest/download/get_cpm.cmake ${CPM_DOWNLOAD_LOCATION})
endif()
include(${CPM_DOWNLOAD_LOCATION})
"#;

const FETCH_CONTENT: &str = r#"include(FetchContent)
# FetchContent_Declare(<name> GIT_REPOSITORY <url> GIT_TAG <tag>)
# FetchContent_MakeAvailable(<name>)
"#;

const CONSOLE_MAIN: &str = r#"#include "{{PROJECT_NAME}}/app.hpp"

int main(int argc, char** argv) {
    return {{PROJECT_NAME_SNAKE}}::run(argc, argv);
}
"#;

const APP_HEADER: &str = r#"#pragma once

namespace {{PROJECT_NAME_SNAKE}} {

int run(int argc, char** argv);

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const APP_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/app.hpp"

#include <iostream>

namespace {{PROJECT_NAME_SNAKE}} {

int run(int /*argc*/, char** /*argv*/) {
    std::cout << "{{PROJECT_NAME}}: {{PROJECT_DESCRIPTION}}\n";
    return 0;
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const CLI_HEADER: &str = r#"#pragma once

#include <CLI/CLI.hpp>

namespace {{PROJECT_NAME_SNAKE}} {

inline CLI::App make_cli() {
    return CLI::App{"{{PROJECT_DESCRIPTION}}", "{{PROJECT_NAME}}"};
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const LOG_HEADER: &str = r#"#pragma once

#include <spdlog/spdlog.h>

namespace {{PROJECT_NAME_SNAKE}}::log {

using spdlog::debug;
using spdlog::error;
using spdlog::info;

}  // namespace {{PROJECT_NAME_SNAKE}}::log
"#;

const LIBRARY_HEADER: &str = r#"#pragma once

#include <string>

namespace {{PROJECT_NAME_SNAKE}} {

class {{PROJECT_NAME_PASCAL}} {
public:
    std::string greet(const std::string& name) const;
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const LIBRARY_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/{{PROJECT_NAME}}.hpp"

namespace {{PROJECT_NAME_SNAKE}} {

std::string {{PROJECT_NAME_PASCAL}}::greet(const std::string& name) const {
    return "Hello, " + name + "!";
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const EXPORT_HEADER: &str = r#"#pragma once

#if defined(_WIN32)
#  define {{PROJECT_NAME_UPPER}}_API __declspec(dllexport)
#else
#  define {{PROJECT_NAME_UPPER}}_API __attribute__((visibility("default")))
#endif
"#;

const LIBRARY_EXAMPLE: &str = r#"#include "{{PROJECT_NAME}}/{{PROJECT_NAME}}.hpp"

#include <iostream>

int main() {
    {{PROJECT_NAME_SNAKE}}::{{PROJECT_NAME_PASCAL}} lib;
    std::cout << lib.greet("world") << '\n';
}
"#;

const BENCHMARK_MAIN: &str = r#"#include <benchmark/benchmark.h>

static void BM_Placeholder(benchmark::State& state) {
    for (auto _ : state) {
    }
}
BENCHMARK(BM_Placeholder);

BENCHMARK_MAIN();
"#;

const HEADER_ONLY_HEADER: &str = r#"#pragma once

#include <string>

namespace {{PROJECT_NAME_SNAKE}} {

class {{PROJECT_NAME_PASCAL}} {
public:
    std::string greet(const std::string& name) const { return "Hello, " + name + "!"; }
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const SINGLE_INCLUDE: &str = r#"#pragma once
// Amalgamated single header for {{PROJECT_NAME}}.
#include "../include/{{PROJECT_NAME}}/{{PROJECT_NAME}}.hpp"
"#;

const MULTI_CLIENT_MAIN: &str = r#"#include "{{PROJECT_NAME}}/core.hpp"

int main() {
    return {{PROJECT_NAME_SNAKE}}::core::start("client");
}
"#;

const MULTI_SERVER_MAIN: &str = r#"#include "{{PROJECT_NAME}}/core.hpp"

int main() {
    return {{PROJECT_NAME_SNAKE}}::core::start("server");
}
"#;

const CORE_HEADER: &str = r#"#pragma once

#include <string_view>

namespace {{PROJECT_NAME_SNAKE}}::core {

int start(std::string_view role);

}  // namespace {{PROJECT_NAME_SNAKE}}::core
"#;

const CORE_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/core.hpp"

#include <iostream>

namespace {{PROJECT_NAME_SNAKE}}::core {

int start(std::string_view role) {
    std::cout << "{{PROJECT_NAME}} " << role << " started\n";
    return 0;
}

}  // namespace {{PROJECT_NAME_SNAKE}}::core
"#;

const GUI_MAIN: &str = r#"#include "{{PROJECT_NAME}}/main_window.hpp"

int main(int argc, char** argv) {
    {{PROJECT_NAME_SNAKE}}::MainWindow window{"{{PROJECT_NAME}}"};
    return window.run(argc, argv);
}
"#;

const MAIN_WINDOW_HEADER: &str = r#"#pragma once

#include <string>

namespace {{PROJECT_NAME_SNAKE}} {

// UI toolkit: {{GUI_FRAMEWORK}}
class MainWindow {
public:
    explicit MainWindow(std::string title);
    int run(int argc, char** argv);

private:
    std::string title_;
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const MAIN_WINDOW_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/main_window.hpp"

#include <utility>

namespace {{PROJECT_NAME_SNAKE}} {

MainWindow::MainWindow(std::string title) : title_(std::move(title)) {}

int MainWindow::run(int /*argc*/, char** /*argv*/) {
    return 0;
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const QT_RESOURCES: &str = r#"<!DOCTYPE RCC>
<RCC version="1.0">
  <qresource prefix="/">
  </qresource>
</RCC>
"#;

const RESOURCES_README: &str = "Icons, fonts and other resources for {{PROJECT_NAME}}.\n";

const NETWORK_MAIN: &str = r#"// Networking backend: {{NETWORK_LIBRARY}}
#include <iostream>

int main() {
    std::cout << "{{PROJECT_NAME}} listening\n";
    return 0;
}
"#;

const SERVER_HEADER: &str = r#"#pragma once

#include <cstdint>

namespace {{PROJECT_NAME_SNAKE}} {

class Server {
public:
    explicit Server(std::uint16_t port);
    void run();

private:
    std::uint16_t port_;
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const SERVER_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/server.hpp"

namespace {{PROJECT_NAME_SNAKE}} {

Server::Server(std::uint16_t port) : port_(port) {}

void Server::run() {}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const CLIENT_HEADER: &str = r#"#pragma once

#include <string>

namespace {{PROJECT_NAME_SNAKE}} {

class Client {
public:
    bool connect(const std::string& host, unsigned short port);
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const CLIENT_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/client.hpp"

namespace {{PROJECT_NAME_SNAKE}} {

bool Client::connect(const std::string& /*host*/, unsigned short /*port*/) {
    return false;
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const PROTOCOL_HEADER: &str = r#"#pragma once

#include <nlohmann/json.hpp>

namespace {{PROJECT_NAME_SNAKE}} {

using Message = nlohmann::json;

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const EMBEDDED_MAIN: &str = r#"#include "hal.hpp"

int main() {
    hal::init();
    for (;;) {
        hal::tick();
    }
}
"#;

const HAL_HEADER: &str = r#"#pragma once

namespace hal {

inline void init() {}
inline void tick() {}

}  // namespace hal
"#;

const GPIO_HEADER: &str = r#"#pragma once

namespace drivers {

void gpio_write(unsigned pin, bool level);

}  // namespace drivers
"#;

const GPIO_SOURCE: &str = r#"#include "gpio.hpp"

namespace drivers {

void gpio_write(unsigned /*pin*/, bool /*level*/) {}

}  // namespace drivers
"#;

const RTOS_TASKS: &str = r#"// RTOS task definitions for {{PROJECT_NAME}}.
void start_tasks() {}
"#;

const ARM_TOOLCHAIN: &str = r#"set(CMAKE_SYSTEM_NAME Generic)
set(CMAKE_SYSTEM_PROCESSOR arm)
set(CMAKE_CXX_COMPILER arm-none-eabi-g++)
set(CMAKE_TRY_COMPILE_TARGET_TYPE STATIC_LIBRARY)
"#;

const WEB_MAIN: &str = r#"#include <iostream>

int main() {
    std::cout << "{{PROJECT_NAME}} service starting\n";
    return 0;
}
"#;

const ROUTES_HEADER: &str = r#"#pragma once

namespace {{PROJECT_NAME_SNAKE}} {

void register_routes();

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const ROUTES_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/routes.hpp"

namespace {{PROJECT_NAME_SNAKE}} {

void register_routes() {}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const DATABASE_SOURCE: &str = "// Database access layer for {{PROJECT_NAME}}.\n";

const AUTH_SOURCE: &str = "// Authentication middleware for {{PROJECT_NAME}}.\n";

const DOCKERFILE: &str = r#"FROM gcc:13 AS build
WORKDIR /src
COPY . .
RUN cmake -S . -B build -DCMAKE_BUILD_TYPE={{BUILD_TYPE}} && cmake --build build

FROM debian:bookworm-slim
COPY --from=build /src/build/{{PROJECT_NAME}} /usr/local/bin/{{PROJECT_NAME}}
ENTRYPOINT ["/usr/local/bin/{{PROJECT_NAME}}"]
"#;

const SERVER_CONFIG: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "port": 8080
}
"#;

const GAME_MAIN: &str = r#"#include "{{PROJECT_NAME}}/engine.hpp"

int main() {
    {{PROJECT_NAME_SNAKE}}::Engine engine;
    return engine.run();
}
"#;

const ENGINE_HEADER: &str = r#"#pragma once

namespace {{PROJECT_NAME_SNAKE}} {

// Framework: {{GAME_FRAMEWORK}}
class Engine {
public:
    int run();
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const ENGINE_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/engine.hpp"

namespace {{PROJECT_NAME_SNAKE}} {

int Engine::run() {
    return 0;
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const GL_RENDERER: &str = "// OpenGL renderer backend.\n";

const VK_RENDERER: &str = "// Vulkan renderer backend.\n";

const AUDIO_SOURCE: &str = "// Audio mixer.\n";

const ASSETS_README: &str = "Game assets for {{PROJECT_NAME}} (textures, models, sounds).\n";

const VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec3 position;

void main() {
    gl_Position = vec4(position, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 color;

void main() {
    color = vec4(1.0);
}
"#;

const QT_MAIN: &str = r#"#include <QApplication>

int main(int argc, char** argv) {
    QApplication app(argc, argv);
    QApplication::setApplicationName("{{PROJECT_NAME}}");
    return app.exec();
}
"#;

const QT_UI_FORM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ui version="4.0">
 <class>MainWindow</class>
 <widget class="QMainWindow" name="MainWindow">
  <property name="windowTitle">
   <string>{{PROJECT_NAME}}</string>
  </property>
 </widget>
</ui>
"#;

const QML_MAIN: &str = r#"import QtQuick
import QtQuick.Window

Window {
    visible: true
    title: "{{PROJECT_NAME}}"
}
"#;

const QT_TRANSLATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en"></TS>
"#;

const SFML_MAIN: &str = r#"#include "{{PROJECT_NAME}}/game.hpp"

int main() {
    {{PROJECT_NAME_SNAKE}}::Game game;
    game.run();
}
"#;

const GAME_HEADER: &str = r#"#pragma once

namespace {{PROJECT_NAME_SNAKE}} {

class Game {
public:
    void run();
};

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const GAME_SOURCE: &str = r#"#include "{{PROJECT_NAME}}/game.hpp"

#include <SFML/Graphics.hpp>

namespace {{PROJECT_NAME_SNAKE}} {

void Game::run() {
    sf::RenderWindow window(sf::VideoMode({800, 600}), "{{PROJECT_NAME}}");
    while (window.isOpen()) {
        window.display();
    }
}

}  // namespace {{PROJECT_NAME_SNAKE}}
"#;

const SFML_SOUND: &str = "#include <SFML/Audio.hpp>\n";

const BOOST_MAIN: &str = r#"#include <iostream>

int main(int argc, char** argv) {
    std::cout << "{{PROJECT_NAME}}\n";
    return 0;
}
"#;

const BOOST_OPTIONS: &str = "#include <boost/program_options.hpp>\n";

const BOOST_ASIO: &str = "#include <boost/asio.hpp>\n";

const BOOST_FILESYSTEM: &str = "#include <boost/filesystem.hpp>\n";

const MOCK_CLOCK: &str = r#"#pragma once

#include <chrono>

struct MockClock {
    std::chrono::milliseconds now{0};
};
"#;

const COVERAGE_CMAKE: &str = r#"option(ENABLE_COVERAGE "Instrument for coverage" OFF)
if(ENABLE_COVERAGE)
  add_compile_options(--coverage)
  add_link_options(--coverage)
endif()
"#;

const GTEST_MAIN: &str = r#"#include <gtest/gtest.h>

TEST({{PROJECT_NAME_PASCAL}}Test, Sanity) {
    EXPECT_EQ(1 + 1, 2);
}
"#;

const CATCH2_MAIN: &str = r#"#include <catch2/catch_test_macros.hpp>

TEST_CASE("{{PROJECT_NAME}} sanity", "[sanity]") {
    REQUIRE(1 + 1 == 2);
}
"#;

const DOCTEST_MAIN: &str = r#"#define DOCTEST_CONFIG_IMPLEMENT_WITH_MAIN
#include <doctest/doctest.h>

TEST_CASE("{{PROJECT_NAME}} sanity") {
    CHECK(1 + 1 == 2);
}
"#;

const BOOST_TEST_MAIN: &str = r#"#define BOOST_TEST_MODULE {{PROJECT_NAME_PASCAL}}Tests
#include <boost/test/included/unit_test.hpp>

BOOST_AUTO_TEST_CASE(sanity) {
    BOOST_CHECK_EQUAL(1 + 1, 2);
}
"#;

const DOCS_INDEX: &str = r#"# {{PROJECT_NAME}} documentation

{{PROJECT_DESCRIPTION}}
{{#IF ENABLE_CODE_EXAMPLES}}
Examples live in `examples/`.
{{/IF}}"#;

const DOXYFILE: &str = r#"PROJECT_NAME           = "{{PROJECT_NAME}}"
PROJECT_BRIEF          = "{{PROJECT_DESCRIPTION}}"
OUTPUT_DIRECTORY       = docs/api
INPUT                  = include src README.md
RECURSIVE              = YES
USE_MDFILE_AS_MAINPAGE = README.md
GENERATE_LATEX         = NO
"#;

const CHANGELOG: &str = r#"# Changelog

## [0.1.0] - {{CURRENT_DATE}}

- Initial project structure.
"#;

const CLANG_FORMAT: &str = r#"BasedOnStyle: Google
IndentWidth: 4
ColumnLimit: 100
Standard: c++{{CPP_STANDARD_NUM}}
"#;

const CLANG_TIDY: &str = r#"Checks: 'bugprone-*,modernize-*,performance-*,readability-*'
WarningsAsErrors: ''
HeaderFilterRegex: 'include/.*'
"#;

const EDITORCONFIG: &str = r#"root = true

[*]
end_of_line = lf
insert_final_newline = true
indent_style = space
indent_size = 4
"#;

const GITHUB_WORKFLOW: &str = r#"name: CI

on: [push, pull_request]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Configure
        run: cmake -S . -B build -DCMAKE_BUILD_TYPE={{BUILD_TYPE}}
      - name: Build
        run: cmake --build build
{{#IF ENABLE_TESTING}}      - name: Test
        run: ctest --test-dir build --output-on-failure
{{/IF}}"#;

const GITLAB_CI: &str = r#"stages: [build, test]

build:
  stage: build
  image: gcc:13
  script:
    - cmake -S . -B build -DCMAKE_BUILD_TYPE={{BUILD_TYPE}}
    - cmake --build build
  artifacts:
    paths: [build/]
{{#IF ENABLE_TESTING}}
test:
  stage: test
  image: gcc:13
  script:
    - ctest --test-dir build --output-on-failure
{{/IF}}"#;

const TRAVIS_CI: &str = r#"language: cpp
compiler: [gcc, clang]
script:
  - cmake -S . -B build && cmake --build build
"#;

const APPVEYOR: &str = r#"image: Visual Studio 2022
build_script:
  - cmake -S . -B build
  - cmake --build build --config {{BUILD_TYPE}}
"#;

const AZURE_PIPELINES: &str = r#"trigger: [main]
pool:
  vmImage: ubuntu-latest
steps:
  - script: cmake -S . -B build && cmake --build build
    displayName: Build
"#;

const CIRCLECI: &str = r#"version: 2.1
jobs:
  build:
    docker:
      - image: gcc:13
    steps:
      - checkout
      - run: cmake -S . -B build && cmake --build build
workflows:
  main:
    jobs: [build]
"#;

const VSCODE_SETTINGS: &str = r#"{
  "cmake.buildDirectory": "${workspaceFolder}/build",
  "C_Cpp.default.cppStandard": "c++{{CPP_STANDARD_NUM}}",
  "editor.formatOnSave": true
}
"#;

const VSCODE_EXTENSIONS: &str = r#"{
  "recommendations": ["ms-vscode.cpptools", "ms-vscode.cmake-tools"]
}
"#;

const VS_CMAKE_SETTINGS: &str = r#"{
  "configurations": [
    {
      "name": "x64-{{BUILD_TYPE}}",
      "generator": "Ninja",
      "configurationType": "{{BUILD_TYPE}}",
      "buildRoot": "${projectDir}\\out\\build\\${name}"
    }
  ]
}
"#;

const VIMRC: &str = r#"set path+=include
let g:ale_cpp_cc_options = '-std=c++{{CPP_STANDARD_NUM}} -Iinclude'
"#;

const DIR_LOCALS: &str = r#"((c++-mode . ((flycheck-clang-language-standard . "c++{{CPP_STANDARD_NUM}}")
             (flycheck-clang-include-path . ("include")))))
"#;

const SUBLIME_PROJECT: &str = r#"{
  "folders": [{ "path": "." }],
  "settings": { "tab_size": 4 }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_skeleton_is_consistent() {
        for kind in TemplateKind::ALL {
            let skeleton = skeleton(*kind);
            assert!(skeleton.check().is_ok(), "{kind} has inconsistent features");
            assert!(!skeleton.directories.is_empty(), "{kind} has no directories");
        }
    }
}
