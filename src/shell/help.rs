//! Banner and help text

pub const BANNER: &str = "\
--- GX Shell Activated ---
=== File Operations ===
gx  [name]        : Create File/Folder
gxd [name]        : Delete
gxc [path]        : Change Directory (cd)
gxl               : List Files (ls)
gxs [name]        : Check Storage Size
gxmv [src] [dst]  : Move/Rename file
gxcp [src] [dst]  : Copy file
gxfind [name]     : Find files by name

=== File Viewing ===
gxcat [file]      : View file contents
gxhead [file]     : View first lines
gxtail [file]     : View last lines

=== System Info ===
gxpwd             : Print working directory
gxdate            : Show current date/time
gxinfo            : Show system info

Type 'gxhelp' for every command, 'exit' or Ctrl+X then Enter to quit
--------------------------------------";

pub const EXTENDED_HELP: &str = "\
╔══════════════════════════════════════════════════════════════════╗
║                      GX Shell Extended Help                      ║
╚══════════════════════════════════════════════════════════════════╝

📁 FILE OPERATIONS:
  gx [name]            - Create file (with .) or folder without extension
  gxd [name]           - Delete file or folder recursively
  gxc [path]           - Change directory
  gxl                  - List files in current directory
  gxs [name]           - Show total size of file/folder
  gxmv [src] [dst]     - Move or rename a file/folder
  gxcp [src] [dst]     - Copy a file
  gxfind [name]        - Search for files containing name
  gxecho [text] [file] - Append text to file
  gxdup [file]         - Create a duplicate copy of file
  gxreplace [old] [new] [file] - Replace text in file

📖 FILE VIEWING:
  gxcat [file]         - Display entire file contents
  gxhead [file]        - Show first lines
  gxtail [file]        - Show last lines
  gxgrep [text] [file] - Find lines containing text
  gxstat [file]        - Show detailed file statistics
  gxhash [file]        - Show SHA-256 checksum
  gxlines [file]       - Count lines in file

🖥️  SYSTEM INFO:
  gxpwd                - Print current working directory
  gxdate               - Show current date and time
  gxinfo               - Display system information
  gxwhich [cmd]        - Find command location in PATH
  gxtree [dir]         - Display directory tree structure

🛠️  UTILITIES:
  gxcount [dir]        - Count files in directory
  gxempty [file]       - Create empty file
  gxmkdir [dir]        - Create directory
  gxtouch [file]       - Create/update file timestamp
  gxhelp               - Show this help message

⏹️  CONTROL:
  exit or Ctrl+X       - Exit the shell
";
